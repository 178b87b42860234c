use criterion::{Criterion, black_box, criterion_group, criterion_main};

use deutschmeister::content::exercises::ExerciseKind;
use deutschmeister::content::filter;
use deutschmeister::content::lessons::{ALL_LESSONS, LESSONS};
use deutschmeister::session::exercise::normalize_answer;

fn bench_exercise_filter(c: &mut Criterion) {
    c.bench_function("exercises_for (all kinds, all lessons)", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for kind in ExerciseKind::ALL {
                total += filter::exercises_for(black_box(kind), black_box(ALL_LESSONS)).len();
                for lesson in LESSONS {
                    total += filter::exercises_for(black_box(kind), black_box(lesson.id)).len();
                }
            }
            total
        })
    });
}

fn bench_vocab_filter(c: &mut Criterion) {
    c.bench_function("vocab_for_lesson (full catalog sweep)", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for lesson in LESSONS {
                total += filter::vocab_for_lesson(black_box(lesson.id)).len();
            }
            total
        })
    });
}

fn bench_normalize(c: &mut Criterion) {
    let samples = [
        "  I AM A STUDENT!  ",
        "Möchtest du einen Kaffee?",
        "I am looking forward to the party.",
    ];
    c.bench_function("normalize_answer", |b| {
        b.iter(|| {
            samples
                .iter()
                .map(|s| normalize_answer(black_box(s)).len())
                .sum::<usize>()
        })
    });
}

criterion_group!(benches, bench_exercise_filter, bench_vocab_filter, bench_normalize);
criterion_main!(benches);
