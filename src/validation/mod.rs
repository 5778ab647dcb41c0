// SPDX-License-Identifier: GPL-3.0-only
pub mod form;
pub mod url_validator;

pub use form::AddCafeForm;
