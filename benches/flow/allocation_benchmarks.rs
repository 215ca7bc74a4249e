use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use fleetflow::model::{Client, Order, Vehicle, VehicleKind, Zone};
use fleetflow::network::build_network;

fn random_instance(orders: u64, vehicles: u64, rng: &mut StdRng) -> (Vec<Order>, Vec<Vehicle>) {
    let zones = ["Z1", "Z2", "Z3", "Z4", "Z5"];
    let kinds = [VehicleKind::Motorcycle, VehicleKind::Car, VehicleKind::Van];

    let orders = (0..orders)
        .map(|i| {
            let zone = Zone::new(zones[rng.gen_range(0..zones.len())]).unwrap();
            let client = Client::new(i, format!("client-{i}"), zone);
            Order::new(i, client, rng.gen_range(1..50), 1).unwrap()
        })
        .collect();

    let vehicles = (0..vehicles)
        .map(|j| {
            let permitted = zones
                .iter()
                .filter(|_| rng.gen_bool(0.6))
                .map(|z| Zone::new(*z).unwrap())
                .collect();
            let kind = kinds[rng.gen_range(0..kinds.len())];
            Vehicle::new(j, kind, rng.gen_range(20..200), permitted).unwrap()
        })
        .collect();

    (orders, vehicles)
}

fn bench_allocation_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocation_solve");
    for &size in &[10u64, 50, 200, 500] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut rng = StdRng::seed_from_u64(7);
            let (orders, vehicles) = random_instance(size, size / 5 + 1, &mut rng);
            b.iter(|| {
                let mut network = build_network(&orders, &vehicles).unwrap();
                network.solve()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_allocation_solve);
criterion_main!(benches);
