//! نظام سندات صرف كرت تحصيل الغرامة
//!
//! واجهة سطر أوامر ثنائية اللغة (عربية أولاً) لتسجيل سندات الصرف
//! وعرضها والبحث فيها وطباعتها.

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod form;
pub mod session;
pub mod store;
