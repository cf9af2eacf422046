use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use querybaker::cond::{and_all, equal, greater_than, less_than};
use querybaker::{Column, Condition, DataType, Statement, Table};

/// Table with `n` integer columns `col0..col{n-1}`, aliased `t`.
fn wide_table(n: usize) -> Table {
    Table::new("wide")
        .with_alias("t")
        .with_columns((0..n).map(|i| Column::new(format!("col{i}"), DataType::Integer, 1)))
}

/// `(col0 = 0 AND col1 < 1 AND ...)` over every column.
fn and_chain(table: &Table) -> Condition {
    let mut conds = table.columns().iter().enumerate().map(|(i, c)| {
        if i % 2 == 0 {
            equal(c, i as i64)
        } else {
            less_than(c, i as i64)
        }
    });
    let first = conds.next().unwrap_or_else(|| Condition::raw("1 = 1"));
    let second = conds.next().unwrap_or_else(|| Condition::raw("1 = 1"));
    and_all(first, second, conds)
}

fn bench_select_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/select_build");

    for n in [1, 5, 10, 50, 100] {
        let table = wide_table(n);
        let select = table
            .select()
            .columns(table.columns())
            .where_(and_chain(&table))
            .order(table.columns().iter().take(3));
        group.bench_with_input(BenchmarkId::from_parameter(n), &select, |b, select| {
            b.iter(|| black_box(select.to_sql()));
        });
    }

    group.finish();
}

fn bench_condition_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/condition_render");

    for depth in [1, 4, 16, 64] {
        let col = Column::new("depth", DataType::Integer, 1);
        let mut cond = greater_than(&col, 0);
        for i in 0..depth {
            cond = cond.or(equal(&col, i)).negate();
        }
        group.bench_with_input(BenchmarkId::from_parameter(depth), &cond, |b, cond| {
            b.iter(|| black_box(cond.render()));
        });
    }

    group.finish();
}

fn bench_create_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/create_table");

    for n in [5, 20, 100] {
        let table = wide_table(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &table, |b, table| {
            b.iter(|| black_box(table.to_sql()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_select_build,
    bench_condition_render,
    bench_create_table
);
criterion_main!(benches);
