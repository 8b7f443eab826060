/// Framing conversion command.
pub mod convert;
/// Path lookup command.
pub mod get;
/// Document summary command.
pub mod info;
/// Whole-document render command.
pub mod show;

mod util;
