//! Propositional entailment over a knowledge base of textual sentences.
//!
//! A knowledge base is told `;`-separated sentences such as
//! `p2 => p3; p3 => p1; a; b & p1 => c`, and asked whether it entails a
//! symbol or a formula. Three [Method]s decide entailment: exhaustive model
//! enumeration over a truth table, forward chaining and backward chaining
//! over Horn clauses.
//!
//! # Usage:
//!```
//! use entailment::{Config, Method, Solver};
//!
//! let mut solver = Method::ForwardChaining.solver(Config::default());
//! solver.tell("p2 => p3; p3 => p1; p1 & p3 => c; p2;").unwrap();
//!
//! assert!(solver.solve_and_query("c").unwrap());
//! assert!(!solver.solve_and_query("d").unwrap());
//!```
#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod calculus;
pub mod config;
pub mod horn;
pub mod knowledge_base;
pub mod misc;
pub mod parser;
pub mod solver;

pub use config::Config;
pub use solver::{Method, Solver, SolverError};

use spin::Mutex;
use string_interner::{backend::BufferBackend, symbol::SymbolU32, StringInterner};

type InternerSymbol = SymbolU32;
type Interner = StringInterner<BufferBackend<InternerSymbol>>;
lazy_static::lazy_static! {
    static ref INTERNER: Mutex<Interner> = Mutex::new(Interner::new());
}
