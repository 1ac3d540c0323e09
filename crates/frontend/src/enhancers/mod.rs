//! One module per page enhancement. Each exposes `attach_all`, which wires
//! its listeners onto the matching server-rendered elements and returns how
//! many it enhanced.

pub mod data_table;
pub mod file_upload;
pub mod forms;
pub mod notifications;
pub mod tooltip;
