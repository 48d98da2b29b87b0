use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Frame {
    If,
    Else,
}

/// ## Open conditional blocks, innermost last
///
/// Indentation of generated statements is derived from the depth of this
/// stack and nothing else.

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Stack {
    frames: Vec<Frame>,
}

impl Stack {
    pub fn new() -> Stack {
        Stack::default()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Statements at the top of `main` sit at level 1.
    pub fn level(&self) -> usize {
        self.frames.len() + 1
    }

    pub fn push_if(&mut self) {
        self.frames.push(Frame::If);
    }

    /// Switch the innermost block to its else branch.
    pub fn enter_else(&mut self) -> Result<()> {
        match self.frames.last_mut() {
            Some(frame) if *frame == Frame::If => {
                *frame = Frame::Else;
                Ok(())
            }
            _ => Err(error!(ElseWithoutIf)),
        }
    }

    pub fn pop(&mut self) -> Result<Frame> {
        match self.frames.pop() {
            Some(frame) => Ok(frame),
            None => Err(error!(EndifWithoutIf)),
        }
    }
}
