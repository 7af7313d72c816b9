//! Uni Advisor Bot
//!
//! Telegram bot that collects a student's academic profile through a short
//! questionnaire, asks a generative model for three matching universities,
//! and serves structured detail views (requirements, scholarships, tuition)
//! plus free-form follow-up questions about any of them.

pub mod config;
pub mod services;
