//! Execution Engine
//!
//! CPU dispatch between the AES-NI and portable kernels.

pub mod dispatcher;

pub use dispatcher::get_active_backend_name;
