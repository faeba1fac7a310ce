//! Performance benchmarks for the Personnel Engine statistics.
//!
//! Covers the aggregation paths a dashboard refresh hits:
//! - Grouped counts over a single field
//! - The full dashboard bundle
//! - Derived-field refresh across a workforce
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{Months, NaiveDate, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use personnel_engine::calculation::DerivedFieldCalculator;
use personnel_engine::config::ConfigLoader;
use personnel_engine::models::{Employee, NewEmployee};
use personnel_engine::repository::HierarchySnapshot;
use personnel_engine::statistics::{count_by, CountField, FilterCriteria, StatisticsAggregator};

const EDUCATION: [&str; 4] = ["SMA", "D3", "S1", ""];
const EMPLOYMENT_TYPES: [&str; 3] = ["PKWT", "PKWTT", "Outsourcing"];
const SUBCATEGORIES: [&str; 3] = ["TAD PAKET SDM", "TAD PAKET PEKERJAAN", "Lainnya"];

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

/// Builds `count` prepared employees spread across the seeded units.
fn workforce(
    config: &ConfigLoader,
    hierarchy: &HierarchySnapshot,
    count: usize,
) -> Vec<Employee> {
    let calculator = DerivedFieldCalculator::new(config.employee_defaults().clone());
    let units = hierarchy.units();
    let base = NaiveDate::from_ymd_opt(1965, 1, 1).unwrap();

    (0..count)
        .map(|i| {
            let unit = &units[i % units.len()];
            let sub_unit = hierarchy.sub_units_of(unit.id).next();
            let birth = base.checked_add_months(Months::new((i % 420) as u32)).unwrap();
            let start = NaiveDate::from_ymd_opt(2010 + (i % 15) as i32, 1 + (i % 12) as u32, 1).unwrap();

            let mut employee = NewEmployee {
                employee_number: format!("GH-{:05}", i),
                full_name: format!("Employee {}", i),
                sex: Some(if i % 3 == 0 { "P" } else { "L" }.to_string()),
                birth_date: Some(birth),
                work_start: Some(start),
                work_end: (i % 2 == 0).then(|| start.checked_add_months(Months::new(180)).unwrap()),
                education: Some(EDUCATION[i % EDUCATION.len()].to_string()),
                employment_type: Some(EMPLOYMENT_TYPES[i % EMPLOYMENT_TYPES.len()].to_string()),
                staffing_subcategory: Some(SUBCATEGORIES[i % SUBCATEGORIES.len()].to_string()),
                uniform_size: (i % 4 != 0).then(|| "L".to_string()),
                shoe_type: (i % 5 != 0).then(|| "Safety".to_string()),
                unit_id: Some(unit.id),
                sub_unit_id: sub_unit.map(|s| s.id),
                ..Default::default()
            }
            .into_employee(Utc::now());
            calculator.prepare_create(&mut employee, as_of()).unwrap();
            employee.is_active = i % 10 != 0;
            employee
        })
        .collect()
}

fn load() -> (ConfigLoader, HierarchySnapshot) {
    let config = ConfigLoader::load("./config/airport").expect("Failed to load config");
    let hierarchy = HierarchySnapshot::from_seed(config.structure());
    (config, hierarchy)
}

/// Benchmark: grouped counts by unit at several workforce sizes.
fn bench_count_by_unit(c: &mut Criterion) {
    let (config, hierarchy) = load();
    let criteria = FilterCriteria::default();

    let mut group = c.benchmark_group("count_by_unit");
    for size in [100usize, 1_000, 10_000] {
        let employees = workforce(&config, &hierarchy, size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &employees, |b, employees| {
            b.iter(|| {
                black_box(count_by(
                    employees,
                    CountField::Unit,
                    &criteria,
                    &hierarchy,
                    config.statistics(),
                ))
            })
        });
    }
    group.finish();
}

/// Benchmark: the full dashboard bundle.
fn bench_dashboard(c: &mut Criterion) {
    let (config, hierarchy) = load();
    let aggregator = StatisticsAggregator::new(config.statistics());

    let mut group = c.benchmark_group("dashboard");
    for size in [1_000usize, 10_000] {
        let employees = workforce(&config, &hierarchy, size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &employees, |b, employees| {
            b.iter(|| black_box(aggregator.dashboard(employees, &hierarchy, as_of())))
        });
    }
    group.finish();
}

/// Benchmark: refreshing calendar-relative fields for a read snapshot.
fn bench_refresh(c: &mut Criterion) {
    let (config, hierarchy) = load();
    let calculator = DerivedFieldCalculator::new(config.employee_defaults().clone());
    let employees = workforce(&config, &hierarchy, 1_000);
    let later = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();

    let mut group = c.benchmark_group("refresh");
    group.throughput(Throughput::Elements(employees.len() as u64));
    group.bench_function("refresh_1000", |b| {
        b.iter(|| {
            let mut snapshot = employees.clone();
            for employee in &mut snapshot {
                calculator.refresh(employee, later);
            }
            black_box(snapshot)
        })
    });
    group.finish();
}

criterion_group!(benches, bench_count_by_unit, bench_dashboard, bench_refresh);
criterion_main!(benches);
