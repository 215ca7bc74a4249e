use std::fmt;

use crate::error::{Error, Result};

/// Identifier of a geographic service zone.
///
/// Construction rejects blank identifiers; everything else is accepted as-is
/// so callers can use whatever naming scheme their territory uses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Zone(String);

impl Zone {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(Error::invalid_input("zone identifier must not be blank"));
        }
        Ok(Zone(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Delivery lifecycle state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    InTransit,
    Delivered,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleKind {
    Motorcycle,
    Car,
    Van,
}

/// Recipient of deliveries; the zone decides which vehicles may serve them.
#[derive(Debug, Clone)]
pub struct Client {
    pub id: u64,
    pub name: String,
    pub zone: Zone,
}

impl Client {
    pub fn new(id: u64, name: impl Into<String>, zone: Zone) -> Self {
        Client {
            id,
            name: name.into(),
            zone,
        }
    }
}

/// A delivery order: a volume demand originating in the client's zone.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: u64,
    pub client: Client,
    pub volume: i64,
    pub priority: u8,
    pub status: OrderStatus,
}

impl Order {
    /// Creates a pending order. Volume must be non-negative; zero is legal
    /// and simply contributes nothing to the solvable flow.
    pub fn new(id: u64, client: Client, volume: i64, priority: u8) -> Result<Self> {
        if volume < 0 {
            return Err(Error::invalid_input("order volume must not be negative"));
        }
        Ok(Order {
            id,
            client,
            volume,
            priority,
            status: OrderStatus::Pending,
        })
    }

    pub fn zone(&self) -> &Zone {
        &self.client.zone
    }
}

/// A vehicle with a volume capacity and an optional zone restriction.
#[derive(Debug, Clone)]
pub struct Vehicle {
    pub id: u64,
    pub kind: VehicleKind,
    pub capacity: i64,
    pub available: bool,
    /// Zones this vehicle may serve; empty means every zone.
    pub permitted_zones: Vec<Zone>,
}

impl Vehicle {
    /// Creates an available vehicle. Capacity must be non-negative.
    pub fn new(id: u64, kind: VehicleKind, capacity: i64, permitted_zones: Vec<Zone>) -> Result<Self> {
        if capacity < 0 {
            return Err(Error::invalid_input("vehicle capacity must not be negative"));
        }
        Ok(Vehicle {
            id,
            kind,
            capacity,
            available: true,
            permitted_zones,
        })
    }

    /// Whether this vehicle is allowed to serve the given zone.
    pub fn serves(&self, zone: &Zone) -> bool {
        self.permitted_zones.is_empty() || self.permitted_zones.contains(zone)
    }
}
