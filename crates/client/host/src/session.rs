//! Host session handle and the records it exposes.
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::init_data::InitData;

/// Viewer identity as reported by the host (`initDataUnsafe.user`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostUser {
    pub id: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default)]
    pub first_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,

    #[serde(default)]
    pub is_premium: bool,
}

impl HostUser {
    /// Name shown in greetings: first and last name joined, or the username.
    pub fn display_name(&self) -> String {
        match (&self.last_name, self.first_name.is_empty()) {
            (Some(last), false) => format!("{} {}", self.first_name, last),
            (None, false) => self.first_name.clone(),
            _ => self
                .username
                .clone()
                .unwrap_or_else(|| format!("user#{}", self.id)),
        }
    }
}

/// Theme reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    /// Parse a host-provided value, falling back to [`ColorScheme::Light`].
    pub fn parse_or_default(value: &str) -> Self {
        value.trim().parse().unwrap_or_default()
    }
}

/// Handle to the host runtime object.
///
/// The handle itself is created once and shared by reference for the lifetime
/// of the process. Its fields are populated by the host, possibly after the
/// handle was handed out, so every accessor returns the current value.
#[derive(Debug, Default)]
pub struct HostSession {
    init_data: RwLock<String>,
    user: RwLock<Option<HostUser>>,
    color_scheme: RwLock<ColorScheme>,
    ready: AtomicBool,
}

impl HostSession {
    /// Session with nothing populated yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Session populated from a raw init-data token.
    ///
    /// The identity is decoded from the token's `user` parameter.
    pub fn from_init_data(raw: impl Into<String>, color_scheme: ColorScheme) -> Self {
        let session = Self::new();
        session.populate(raw);
        session.set_color_scheme(color_scheme);
        session
    }

    /// Current init-data token; empty until the host loads it.
    pub fn init_data(&self) -> String {
        self.init_data
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn user(&self) -> Option<HostUser> {
        self.user
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn color_scheme(&self) -> ColorScheme {
        *self
            .color_scheme
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Whether the app has acknowledged load to the host.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Replace the init-data token and the identity decoded from it.
    pub fn populate(&self, raw: impl Into<String>) {
        let raw = raw.into();
        let parsed = InitData::parse(&raw);

        *self
            .init_data
            .write()
            .unwrap_or_else(PoisonError::into_inner) = raw;
        self.set_user(parsed.user);
    }

    pub fn set_user(&self, user: Option<HostUser>) {
        *self.user.write().unwrap_or_else(PoisonError::into_inner) = user;
    }

    pub fn set_color_scheme(&self, scheme: ColorScheme) {
        *self
            .color_scheme
            .write()
            .unwrap_or_else(PoisonError::into_inner) = scheme;
    }

    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }
}
