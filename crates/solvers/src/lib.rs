//! Solver lifecycle for Kanisa.
//!
//! Every Kanisa solver follows the same lifecycle: it is created with
//! [`HyperParameters`], loads and validates a problem with
//! [`Solver::build`], and runs with [`Solver::compute`]. Concrete algorithms
//! plug in by implementing [`Algorithm`]; the lifecycle owns validation and
//! the build-before-run rule.
//!
//! ```
//! use kanisa_core::{HyperParameters, ProblemInput};
//! use kanisa_solvers::{Algorithm, Context, Solver};
//!
//! /// Evaluates the midpoint of the bounds.
//! struct Midpoint;
//!
//! impl Algorithm for Midpoint {
//!     type Solution = (Vec<f64>, f64);
//!     type Error = std::convert::Infallible;
//!
//!     fn run(&mut self, context: &Context<'_>) -> Result<Self::Solution, Self::Error> {
//!         let x: Vec<f64> = context
//!             .bounds()
//!             .iter()
//!             .map(|b| 0.5 * (b.lower + b.upper))
//!             .collect();
//!         let f = context.evaluate(&x);
//!         Ok((x, f))
//!     }
//! }
//!
//! let mut solver = Solver::new(HyperParameters::default(), Midpoint);
//! let problem = ProblemInput::new(|x| x[0] * x[0] + x[1], [(0.0, 2.0), (-1.0, 1.0)]);
//!
//! let (x, f) = solver.compute(problem).unwrap();
//! assert_eq!(x, vec![1.0, 0.0]);
//! assert_eq!(f, 1.0);
//! ```
//!
//! [`HyperParameters`]: kanisa_core::HyperParameters

pub mod lifecycle;

pub use lifecycle::{Algorithm, ComputeError, Context, NotImplemented, Solver, Unimplemented};
