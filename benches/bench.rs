// Criterion benchmarks for the survey encoder and predictor

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use job_satisfaction::core::{encode, ForestModel, LinearModel, Predictor, Question, RegressionModel, RegressionTree, TreeNode};
use job_satisfaction::models::{FeatureNames, SurveyResponse};

fn feature_names() -> FeatureNames {
    let mut names: Vec<String> = Question::ordinal().map(|q| q.name().to_string()).collect();
    for q in Question::categorical() {
        for option in &q.options()[1..] {
            names.push(format!("{}_{}", q.name(), option));
        }
    }
    FeatureNames::new(names)
}

fn create_response() -> SurveyResponse {
    let mut response = SurveyResponse::new();
    for (idx, q) in Question::ordinal().enumerate() {
        response.insert(q, Question::WorkLifeBalance.options()[idx % 5]);
    }
    response
        .with_answer(Question::AgeBracket, "35-44")
        .with_answer(Question::Gender, "Female")
        .with_answer(Question::Ethnicity, "Hispanic")
        .with_answer(Question::Department, "Finance")
}

fn create_forest(n_features: usize, n_trees: usize) -> RegressionModel {
    let trees = (0..n_trees)
        .map(|t| RegressionTree {
            nodes: vec![
                TreeNode::Split { feature: t % n_features, threshold: 2.5, left: 1, right: 2 },
                TreeNode::Leaf { value: 2.0 + (t % 3) as f64 * 0.5 },
                TreeNode::Split { feature: (t + 1) % n_features, threshold: 0.5, left: 3, right: 4 },
                TreeNode::Leaf { value: 3.0 },
                TreeNode::Leaf { value: 4.0 },
            ],
        })
        .collect();
    RegressionModel::Forest(ForestModel { n_features, trees })
}

fn bench_encode(c: &mut Criterion) {
    let names = feature_names();
    let response = create_response();

    c.bench_function("encode_full_survey", |b| {
        b.iter(|| encode(black_box(&response), black_box(&names)))
    });
}

fn bench_predict(c: &mut Criterion) {
    let names = feature_names();
    let response = create_response();
    let mut group = c.benchmark_group("predict");

    let linear = Predictor::new(
        RegressionModel::Linear(LinearModel {
            intercept: 0.4,
            coefficients: vec![0.05; names.len()],
        }),
        names.clone(),
    );
    group.bench_function("linear", |b| {
        b.iter(|| linear.predict(black_box(&response)))
    });

    for n_trees in [10, 100, 500].iter() {
        let forest = Predictor::new(create_forest(names.len(), *n_trees), names.clone());
        group.bench_with_input(BenchmarkId::new("forest", n_trees), n_trees, |b, _| {
            b.iter(|| forest.predict(black_box(&response)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_predict);
criterion_main!(benches);
