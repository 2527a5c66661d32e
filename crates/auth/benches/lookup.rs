use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use serde_json::json;
use staffdesk_auth::{AccessContext, ClaimSet, FieldGroup, PermissionMatrix, ResourceKind, resolve_role};

fn claim_sets() -> Vec<(&'static str, ClaimSet)> {
    vec![
        ("empty", ClaimSet::new()),
        ("admin", ClaimSet::from(["Admin"])),
        (
            "recruiter_noisy",
            (0..32)
                .map(|i| format!("group_{i}"))
                .chain(["EmployeeID_42".to_string(), "recruiter".to_string()])
                .collect(),
        ),
    ]
}

fn bench_resolve_role(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_role");
    for (name, claims) in claim_sets() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &claims, |b, claims| {
            b.iter(|| resolve_role(black_box(claims)))
        });
    }
    group.finish();
}

fn bench_field_checks(c: &mut Criterion) {
    let matrix = PermissionMatrix::standard();
    let claims = ClaimSet::from(["Senior_Recruiter"]);

    c.bench_function("can_edit_per_field", |b| {
        let access = AccessContext::new(&claims, matrix);
        b.iter(|| {
            access.can_edit(
                black_box(ResourceKind::Client),
                black_box(FieldGroup::MarketingInfo),
                black_box(Some("marketingStartDate")),
            )
        })
    });

    c.bench_function("redact_client_record", |b| {
        let access = AccessContext::new(&claims, matrix);
        let record = json!({
            "id": 1,
            "firstName": "Ada",
            "clientStatus": "active",
            "subscriptionPlan": "gold",
            "placedCompany": "Initech",
            "salary": 100000
        });
        b.iter(|| {
            let mut map = record.as_object().cloned().unwrap_or_default();
            access.redact(ResourceKind::Client, &mut map)
        })
    });
}

criterion_group!(benches, bench_resolve_role, bench_field_checks);
criterion_main!(benches);
