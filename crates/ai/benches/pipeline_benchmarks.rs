use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chrono::{Duration, TimeZone, Utc};
use upkeep_ai::{
    AnalyticsJob, EquipmentSnapshot, MaintenanceAnalysisInput, MaintenanceAnalysisJob,
    MaintenanceKind, MaintenanceLogEntry, PredictionHorizon, SensorReadings,
};
use upkeep_core::TenantId;

fn input_with_series_len(tenant_id: TenantId, len: usize) -> MaintenanceAnalysisInput {
    let as_of = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let series: Vec<f64> = (0..len).map(|i| 150.0 + (i % 100) as f64).collect();

    MaintenanceAnalysisInput {
        equipment: EquipmentSnapshot {
            tenant_id,
            equipment_id: "EQ-BENCH".to_string(),
            equipment_type: "HVAC System - Rooftop Unit".to_string(),
            model: "ACME 9000".to_string(),
            installed_at: as_of - Duration::days(365 * 12),
            last_maintained_at: Some(as_of - Duration::days(45)),
            location: "Roof".to_string(),
        },
        sensors: Some(SensorReadings {
            temperature: Some(series.clone()),
            pressure: Some(series.clone()),
            vibration: Some(series.iter().map(|v| v / 30.0).collect()),
            energy_consumption: Some(series),
            runtime_hours: Some(40_000.0),
            cycle_count: Some(120_000),
            error_codes: vec!["E17".to_string()],
        }),
        history: (0..24)
            .map(|i| MaintenanceLogEntry {
                performed_at: as_of - Duration::days(30 * i),
                kind: if i % 3 == 0 {
                    MaintenanceKind::Emergency
                } else {
                    MaintenanceKind::Preventive
                },
                parts_replaced: vec![],
                cost: 180.0,
                duration_hours: 2.5,
            })
            .collect(),
        horizon: PredictionHorizon::Days90,
        as_of,
    }
}

fn bench_full_pipeline(c: &mut Criterion) {
    let tenant_id = TenantId::new();
    let mut group = c.benchmark_group("maintenance_pipeline");

    for len in [16usize, 256, 4096] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(
            BenchmarkId::new("full_report", len),
            &len,
            |b, &len| {
                let input = input_with_series_len(tenant_id, len);
                b.iter(|| {
                    let job =
                        MaintenanceAnalysisJob::new(tenant_id, black_box(input.clone()));
                    black_box(job.run().expect("pipeline runs"))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_full_pipeline);
criterion_main!(benches);
