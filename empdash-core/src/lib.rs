//! empdash-core: the parts of the employee dashboard that need no database
//! or network: record model, line rendering, configuration.

pub mod config;
pub mod error;
pub mod record;
pub mod render;

pub use config::{DashConfig, DatabaseConfig};
pub use error::{DashError, Result};
pub use record::{CellValue, Record};
pub use render::{present, render_lines, Surface, WriterSurface, HEADER};
