use std::collections::BTreeMap;

use log::debug;

use crate::error::Result;
use crate::flow::MultiTerminal;
use crate::model::{Order, Vehicle};

/// A ready-to-solve orders-to-vehicles flow instance.
///
/// Node layout: orders at `0..n`, vehicles at `n..n+m` (vehicle `j` at
/// `n + j`), then the super-source and super-sink. Solving mutates residual
/// capacities in place; extraction only reads them, so it can be repeated.
#[derive(Debug, Clone)]
pub struct AllocationNetwork {
    flow: MultiTerminal<i64>,
    orders: usize,
    vehicles: usize,
    total_demand: i64,
    fleet_capacity: i64,
}

/// Roster-wide totals of a solved allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationSummary {
    /// Sum of all order volumes, eligible or not.
    pub total_demand: i64,
    /// Sum of available vehicles' capacities.
    pub fleet_capacity: i64,
    /// Total volume routed to vehicles.
    pub allocated: i64,
    /// Fleet capacity left unused.
    pub idle_capacity: i64,
}

/// Builds the bipartite allocation network for the given orders and
/// vehicles.
///
/// An order is connected to every vehicle permitted to serve its zone, with
/// edge capacity equal to the order's volume. Orders draw from the
/// super-source (capped at their volume) and vehicles drain into the
/// super-sink (capped at their capacity). Unavailable vehicles keep their
/// node index so reported indices match the caller's roster, but receive no
/// edges at all.
///
/// # Examples
///
/// ```
/// use fleetflow::model::{Client, Order, Vehicle, VehicleKind, Zone};
/// use fleetflow::network::build_network;
///
/// let zone = Zone::new("Z1").unwrap();
/// let client = Client::new(1, "Acme", zone);
/// let orders = vec![Order::new(1, client, 10, 1).unwrap()];
/// let vehicles = vec![Vehicle::new(1, VehicleKind::Van, 20, vec![]).unwrap()];
///
/// let mut network = build_network(&orders, &vehicles).unwrap();
/// assert_eq!(network.solve(), 10);
/// ```
pub fn build_network(orders: &[Order], vehicles: &[Vehicle]) -> Result<AllocationNetwork> {
    let n = orders.len();
    let m = vehicles.len();
    let mut flow = MultiTerminal::new(n + m);

    let mut eligible = 0usize;
    for (i, order) in orders.iter().enumerate() {
        for (j, vehicle) in vehicles.iter().enumerate() {
            if vehicle.available && vehicle.serves(order.zone()) {
                flow.add_edge(i, n + j, order.volume)?;
                eligible += 1;
            }
        }
    }

    let sources: Vec<(usize, i64)> = orders.iter().enumerate().map(|(i, o)| (i, o.volume)).collect();
    flow.connect_sources(&sources)?;

    let sinks: Vec<(usize, i64)> = vehicles
        .iter()
        .enumerate()
        .filter(|(_, v)| v.available)
        .map(|(j, v)| (n + j, v.capacity))
        .collect();
    flow.connect_sinks(&sinks)?;

    debug!("allocation network built: {n} orders, {m} vehicles, {eligible} eligibility edges");

    Ok(AllocationNetwork {
        flow,
        orders: n,
        vehicles: m,
        total_demand: orders.iter().map(|o| o.volume).sum(),
        fleet_capacity: vehicles
            .iter()
            .filter(|v| v.available)
            .map(|v| v.capacity)
            .sum(),
    })
}

impl AllocationNetwork {
    pub fn order_count(&self) -> usize {
        self.orders
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicles
    }

    /// Maximum total volume that can be feasibly transported. Mutates the
    /// network; extraction afterwards reads the solved state.
    pub fn solve(&mut self) -> i64 {
        let value = self.flow.solve();
        debug!("allocation solved: {value} of {} total demand", self.total_demand);
        value
    }

    /// Volume routed to each vehicle, `0..m` inclusive of zeros, read off
    /// the vehicles' super-sink edges.
    pub fn allocations(&self) -> BTreeMap<usize, i64> {
        let net = self.flow.network();
        let sink = self.flow.super_sink();
        let mut out = BTreeMap::new();
        for j in 0..self.vehicles {
            let node = self.orders + j;
            let sent = net
                .edges(node)
                .iter()
                .find(|e| e.to == sink)
                .map(|e| e.sent())
                .unwrap_or(0);
            out.insert(j, sent);
        }
        out
    }

    /// Per-vehicle `(order index, volume)` pairs for every order→vehicle
    /// edge that carries flow. This is the hand-off a downstream routing
    /// component consumes to sequence each vehicle's stops.
    pub fn assignments(&self) -> BTreeMap<usize, Vec<(usize, i64)>> {
        let net = self.flow.network();
        let mut out: BTreeMap<usize, Vec<(usize, i64)>> = BTreeMap::new();
        for j in 0..self.vehicles {
            out.insert(j, Vec::new());
        }
        for i in 0..self.orders {
            for edge in net.edges(i) {
                if edge.to < self.orders || edge.to >= self.orders + self.vehicles {
                    continue;
                }
                let sent = edge.sent();
                if sent > 0 {
                    out.entry(edge.to - self.orders).or_default().push((i, sent));
                }
            }
        }
        out
    }

    /// Demand/capacity totals of the solved allocation.
    pub fn summary(&self) -> AllocationSummary {
        let allocated = self.allocations().values().sum();
        AllocationSummary {
            total_demand: self.total_demand,
            fleet_capacity: self.fleet_capacity,
            allocated,
            idle_capacity: self.fleet_capacity - allocated,
        }
    }
}
