use super::ast::*;
use super::token::*;
use super::*;
