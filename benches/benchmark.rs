//! パフォーマンスベンチマーク
//!
//! 週間メニュー抽出のスループットを測定する。典型的な1週間分のシートと、
//! 行数を増やした悪性に近いシートの両方を対象とする。フィクスチャは
//! rust_xlsxwriterでメモリ上に生成する。

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_xlsxwriter::Workbook;
use weekmenu::MenuExtractorBuilder;

const DAYS: [&str; 6] = [
    "MONDAY",
    "TUESDAY",
    "WEDNESDAY",
    "THURSDAY",
    "FRIDAY",
    "SATURDAY",
];

/// 典型的な週間メニューのワークブックを生成
fn generate_menu(rows_per_meal: u32) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Weekly Menu").unwrap();

    for (col, day) in DAYS.iter().enumerate() {
        worksheet.write_string(0, (col + 1) as u16, *day).unwrap();
    }

    let mut row = 1u32;
    for meal in ["BREAKFAST", "LUNCH", "SNACKS", "DINNER"] {
        worksheet.write_string(row, 0, meal).unwrap();
        for item in 0..rows_per_meal {
            row += 1;
            for col in 0..DAYS.len() {
                worksheet
                    .write_string(row, (col + 1) as u16, format!("Dish {} {}", meal, item))
                    .unwrap();
            }
        }
        row += 1;
    }

    workbook.save_to_buffer().unwrap()
}

fn benchmark_typical_menu(c: &mut Criterion) {
    let data = generate_menu(8);
    let extractor = MenuExtractorBuilder::new().build().unwrap();

    let mut group = c.benchmark_group("typical_menu");
    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("parse_one_week", |b| {
        b.iter(|| {
            let menu = extractor.parse_bytes(black_box(&data)).unwrap();
            black_box(menu)
        });
    });

    group.finish();
}

fn benchmark_tall_menu(c: &mut Criterion) {
    // 行数に対して線形であることの確認用
    let data = generate_menu(500);
    let extractor = MenuExtractorBuilder::new().build().unwrap();

    let mut group = c.benchmark_group("tall_menu");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.sample_size(10);

    group.bench_function("parse_2000_rows", |b| {
        b.iter(|| {
            let menu = extractor.parse_bytes(black_box(&data)).unwrap();
            black_box(menu)
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_typical_menu, benchmark_tall_menu);
criterion_main!(benches);
