// Groove shared type definitions
// Each submodule defines plain data records shared by managers, services and the RPC layer.

pub mod bookmark;
pub mod download;
pub mod errors;
pub mod history;
pub mod privacy;
pub mod reading_list;
pub mod settings;
pub mod tab;
