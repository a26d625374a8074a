use std::ops::{Index, IndexMut};

use crate::data::Pos;

/// Row-major 2D grid. Indexing is unchecked - callers test `contains`
/// first because the input grid has no guaranteed wall border.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Vec2d<T> {
    data: Vec<T>,
    rows: i32,
    cols: i32,
}

impl<T: Copy> Vec2d<T> {
    pub(crate) fn new(rows: i32, cols: i32, default: T) -> Self {
        assert!(rows >= 0 && cols >= 0);
        Vec2d {
            data: vec![default; rows as usize * cols as usize],
            rows,
            cols,
        }
    }
}

impl<T> Vec2d<T> {
    pub(crate) fn rows(&self) -> i32 {
        self.rows
    }

    pub(crate) fn cols(&self) -> i32 {
        self.cols
    }

    pub(crate) fn contains(&self, pos: Pos) -> bool {
        pos.r >= 0 && pos.r < self.rows && pos.c >= 0 && pos.c < self.cols
    }
}

impl<T> Index<Pos> for Vec2d<T> {
    type Output = T;

    fn index(&self, index: Pos) -> &Self::Output {
        let index = index.r as usize * self.cols as usize + index.c as usize;
        // unchecked indexing is only marginally faster (if at all) to justify unsafe
        &self.data[index]
    }
}

impl<T> IndexMut<Pos> for Vec2d<T> {
    fn index_mut(&mut self, index: Pos) -> &mut Self::Output {
        let index = index.r as usize * self.cols as usize + index.c as usize;
        &mut self.data[index]
    }
}
