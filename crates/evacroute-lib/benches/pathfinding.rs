use criterion::{criterion_group, criterion_main, Criterion};
use evacroute_lib::{build_graph, find_route, plan_route, Building, EdgeRecord, RouteRequest};
use once_cell::sync::Lazy;
use std::hint::black_box;

/// Five floors of classrooms hanging off corridors, linked by stairwells,
/// with two exits on the ground floor.
fn synthetic_records() -> Vec<EdgeRecord> {
    let mut records = Vec::new();
    for i in 100..600 {
        let floor = ((i - 100) % 5) + 1;
        let corridor = 1 + ((i - 100) % 80);
        records.push(
            EdgeRecord::new(format!("Aula_{i}"), format!("Pasillo_{corridor}"))
                .with_floors(floor, floor)
                .with_distance(f64::from(5 + (i % 15)))
                .with_congestion(1.0 + f64::from(i % 10) * 0.1),
        );
    }
    for i in 1..=350 {
        let floor = (i % 5) + 1;
        let next = if i + 20 > 100 { (i % 80) + 1 } else { i + 20 };
        records.push(
            EdgeRecord::new(format!("Pasillo_{i}"), format!("Pasillo_{next}"))
                .with_floors(floor, floor)
                .with_distance(f64::from(8 + (i % 20)))
                .with_congestion(1.1 + f64::from(i % 8) * 0.1),
        );
    }
    for i in 1..149 {
        let upper = (i % 4) + 1;
        records.push(
            EdgeRecord::new(format!("Escalera_{i}"), format!("Pasillo_{}", 5 + (i % 70)))
                .with_floors(upper, (upper % 5) + 1)
                .with_distance(f64::from(10 + (i % 8)))
                .with_height(3.5),
        );
    }
    records.push(EdgeRecord::new("Pasillo_10", "Salida_Principal").with_total_weight(20.0));
    records.push(EdgeRecord::new("Pasillo_25", "Salida_Emergencia").with_total_weight(25.0));
    records
}

static RECORDS: Lazy<Vec<EdgeRecord>> = Lazy::new(synthetic_records);
static BUILDING: Lazy<Building> = Lazy::new(|| build_graph(&RECORDS).expect("records build"));
static EXIT_REQUEST: Lazy<RouteRequest> = Lazy::new(|| RouteRequest::to_nearest_exit("Aula_105"));

fn benchmark_pathfinding(c: &mut Criterion) {
    c.bench_function("build_graph_1000_records", |b| {
        let records = &*RECORDS;
        b.iter(|| {
            let building = build_graph(records).expect("records build");
            black_box(building.edge_count())
        });
    });

    let building = &*BUILDING;

    c.bench_function("nearest_exit_aula_105", |b| {
        let request = &*EXIT_REQUEST;
        b.iter(|| black_box(plan_route(building, request).is_found()));
    });

    c.bench_function("explicit_pasillo_1_pasillo_80", |b| {
        b.iter(|| black_box(find_route(building, "Pasillo_1", Some("Pasillo_80")).is_found()));
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
