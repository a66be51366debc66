//! Performance benchmarks for the compensation modeling engine.
//!
//! This benchmark suite verifies that the calculation engine meets
//! performance targets:
//! - Single scenario calculation: < 100μs mean
//! - Call-pay impact with a handful of tiers: < 100μs mean
//! - Blend pipeline over 100 provider records: < 1ms mean
//! - Scenario endpoint round trip: < 1ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use comp_engine::api::{AppState, create_router};
use comp_engine::calculation::{blend, impact, percentiles_from_records, recommend_cf, run_scenario};
use comp_engine::config::SurveyLoader;
use comp_engine::models::{
    BlendMode, CallBurden, CallPayContext, CallRates, CallTier, CompTier, ConversionFactorModel,
    CoverageType, MarketBenchmarks, PaymentMethod, ProviderRecord, TierBasis,
};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn benchmarks() -> MarketBenchmarks {
    MarketBenchmarks {
        wrvu_25: Some(Decimal::from(4000)),
        wrvu_50: Some(Decimal::from(5000)),
        wrvu_75: Some(Decimal::from(6500)),
        wrvu_90: Some(Decimal::from(8000)),
        tcc_25: Some(Decimal::from(250000)),
        tcc_50: Some(Decimal::from(330000)),
        tcc_75: Some(Decimal::from(420000)),
        tcc_90: Some(Decimal::from(520000)),
        cf_25: Some(Decimal::from(45)),
        cf_50: Some(Decimal::from(55)),
        cf_75: Some(Decimal::from(65)),
        cf_90: Some(Decimal::from(75)),
    }
}

fn tiered_model() -> ConversionFactorModel {
    ConversionFactorModel::Tiered {
        tier_basis: TierBasis::Threshold,
        tiers: vec![
            CompTier {
                threshold: Some(Decimal::from(4000)),
                cf: Decimal::from(50),
            },
            CompTier {
                threshold: Some(Decimal::from(6000)),
                cf: Decimal::from(55),
            },
            CompTier {
                threshold: None,
                cf: Decimal::from(60),
            },
        ],
    }
}

fn call_tiers(count: usize) -> Vec<CallTier> {
    (0..count)
        .map(|i| CallTier {
            coverage_type: CoverageType::EmergencyDepartment,
            payment_method: PaymentMethod::DailyShiftRate,
            rates: CallRates {
                weekday: Decimal::from(500 + i as u32),
                weekend: Decimal::from(600),
                holiday: Decimal::from(800),
                trauma_uplift_percent: None,
            },
            burden: CallBurden {
                weekday_calls_per_month: Decimal::from(15),
                weekend_calls_per_month: Decimal::from(4),
                holidays_per_year: Decimal::from(8),
                avg_callbacks_per_24h: Decimal::from(2),
                avg_cases_per_24h: None,
            },
            enabled: true,
        })
        .collect()
}

fn provider_records(count: usize) -> Vec<ProviderRecord> {
    (0..count)
        .map(|i| {
            ProviderRecord::new(
                Decimal::from(4000 + (i as u32 % 50) * 60),
                Decimal::from(300000 + (i as u32 % 50) * 4000),
                Decimal::ONE,
            )
        })
        .collect()
}

fn bench_scenario_calculation(c: &mut Criterion) {
    let benchmarks = benchmarks();
    let single = ConversionFactorModel::Single {
        cf: Decimal::from(55),
    };
    let tiered = tiered_model();

    let mut group = c.benchmark_group("scenario");
    group.bench_function("single_cf", |b| {
        b.iter(|| {
            run_scenario(
                black_box(Decimal::from(6000)),
                Decimal::ONE,
                Decimal::from(250000),
                &single,
                Some(&benchmarks),
            )
            .unwrap()
        })
    });
    group.bench_function("tiered_cf", |b| {
        b.iter(|| {
            run_scenario(
                black_box(Decimal::from(7000)),
                Decimal::ONE,
                Decimal::from(250000),
                &tiered,
                Some(&benchmarks),
            )
            .unwrap()
        })
    });
    group.finish();
}

fn bench_call_pay_impact(c: &mut Criterion) {
    let context = CallPayContext {
        providers_on_call: 6,
        rotation_ratio: Decimal::from(4),
        model_year: 2026,
    };

    let mut group = c.benchmark_group("call_pay_impact");
    for tier_count in [1usize, 4, 8] {
        let tiers = call_tiers(tier_count);
        group.throughput(Throughput::Elements(tier_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(tier_count),
            &tiers,
            |b, tiers| b.iter(|| impact(black_box(tiers), &context, Some(Decimal::from(400000)))),
        );
    }
    group.finish();
}

fn bench_blend_pipeline(c: &mut Criterion) {
    let survey = benchmarks();
    let records = provider_records(100);

    c.bench_function("blend_100_records", |b| {
        b.iter(|| {
            let internal = percentiles_from_records(black_box(&records));
            let blended = blend(internal.as_ref(), &survey, BlendMode::Blended, None);
            recommend_cf(&blended, 2026)
        })
    });
}

fn bench_scenario_endpoint(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let surveys = SurveyLoader::load("./config/surveys").expect("Failed to load surveys");
    let state = AppState::new(surveys);
    let router = create_router(state);

    let body = serde_json::json!({
        "wrvus": "6000",
        "fte": "1.0",
        "base_pay": "250000",
        "model": { "type": "single", "cf": "55" },
        "specialty": "family_medicine"
    })
    .to_string();

    c.bench_function("scenario_endpoint", |b| {
        b.to_async(&runtime).iter(|| {
            let router = router.clone();
            let body = body.clone();
            async move {
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/scenario")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                black_box(response.status())
            }
        })
    });
}

criterion_group!(
    benches,
    bench_scenario_calculation,
    bench_call_pay_impact,
    bench_blend_pipeline,
    bench_scenario_endpoint
);
criterion_main!(benches);
