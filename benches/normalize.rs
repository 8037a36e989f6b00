// benches/normalize.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use trivia_export::{
    csv::{self, CsvStyle},
    normalize::normalize_all,
    presenter::FilteredView,
    question::RawQuestion,
};

/// Entity-heavy records, shaped like a full 50-question API page.
fn sample(n: usize) -> Vec<RawQuestion> {
    let diffs = ["easy", "medium", "hard"];
    (0..n)
        .map(|i| RawQuestion {
            question: format!("Which &quot;hero&quot; #{i} said &#039;Caf&eacute; &amp; cr&egrave;me&#039;?"),
            category: category_for(i),
            difficulty: diffs[i % 3].to_string(),
            correct_answer: "Jos&eacute;".to_string(),
            incorrect_answers: vec![
                "Ren&eacute;e".to_string(),
                "&ldquo;Zo&euml;&rdquo;".to_string(),
                "plain".to_string(),
            ],
            kind: Some("multiple".to_string()),
        })
        .collect()
}

fn category_for(i: usize) -> String {
    if i % 2 == 0 { "Entertainment: Film".into() } else { "Science &amp; Nature".into() }
}

fn bench_normalize(c: &mut Criterion) {
    let raws = sample(50);

    c.bench_function("normalize_50", |b| {
        b.iter(|| {
            let qs = normalize_all(black_box(raws.clone()));
            black_box(qs.len())
        })
    });

    let qs = normalize_all(raws.clone());

    c.bench_function("csv_download_50", |b| {
        b.iter(|| black_box(csv::to_csv_string(black_box(&qs), CsvStyle::DOWNLOAD).len()))
    });

    c.bench_function("filter_hard_50", |b| {
        b.iter(|| black_box(FilteredView::new(black_box(&qs), "hard").len()))
    });
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
