use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shared view over a listing record, whatever its concrete shape
pub trait Ad {
    fn ad_id(&self) -> u64;
    fn set_ad_id(&mut self, id: u64);
    fn title(&self) -> &str;
    fn set_title(&mut self, title: String);
    /// Poster name
    fn name(&self) -> &str;
    fn set_name(&mut self, name: String);
    fn is_active(&self) -> bool;
    fn set_is_active(&mut self, active: bool);
}

/// Which record shape a page should be injected into
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum AdKind {
    /// Someone has a room or flat to rent out
    #[default]
    Offer,
    /// Someone is looking for a place
    Request,
}

/// A listing where a room or flat is offered
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Offer {
    ad_id: u64,
    title: String,
    name: String,
    active: bool,
    address: String,
    pub base_rent: i32,
    pub utilities: i32,
    pub miscellaneous: i32,
    pub deposit: i32,
    pub existing_equip_fee: i32,
    pub room_size: i32,
    pub total_size: i32,
    pub flatmate_age_min: i32,
    pub flatmate_age_max: i32,
}

impl Offer {
    pub fn address(&self) -> &str {
        &self.address
    }

    pub(crate) fn set_address(&mut self, address: String) {
        self.address = address;
    }
}

/// A listing where someone searches for a place
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Request {
    ad_id: u64,
    title: String,
    name: String,
    active: bool,
}

macro_rules! impl_ad {
    ($ty:ty) => {
        impl Ad for $ty {
            fn ad_id(&self) -> u64 {
                self.ad_id
            }

            fn set_ad_id(&mut self, id: u64) {
                self.ad_id = id;
            }

            fn title(&self) -> &str {
                &self.title
            }

            fn set_title(&mut self, title: String) {
                self.title = title;
            }

            fn name(&self) -> &str {
                &self.name
            }

            fn set_name(&mut self, name: String) {
                self.name = name;
            }

            fn is_active(&self) -> bool {
                self.active
            }

            fn set_is_active(&mut self, active: bool) {
                self.active = active;
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
        }
    };
}

impl_ad!(Offer);
impl_ad!(Request);

/// Result of running the injector pipeline over one page
#[derive(Debug, Clone, Serialize)]
pub struct Extraction<A> {
    pub origin: String,
    pub loaded_at: DateTime<Utc>,
    pub extracted_at: DateTime<Utc>,
    pub ad: A,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
