//! Case-management console for a law firm: a navigation-stack driven,
//! bilingual (Arabic/English) front over an in-memory fixture dataset,
//! with an optional AI assistant for summaries and document analysis.

pub mod domain;
pub mod dto;
pub mod forms;
pub mod i18n;
pub mod models;
pub mod navigation;
pub mod repository;
pub mod services;
