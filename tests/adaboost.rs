use rand::prelude::*;
use rand_distr::Normal;

use stumpboost::prelude::*;


fn line_sample(target: Vec<f64>) -> Sample {
    let rows = [[0.0], [1.0], [2.0], [3.0]];
    Sample::from_rows(&rows[..], target).unwrap()
}


/// Two Gaussian blobs in `n_feature` dimensions,
/// centered at `-1` (label `-1`) and `+1` (label `+1`).
fn blobs(n_sample: usize, n_feature: usize, seed: u64) -> Sample {
    let mut rng = StdRng::seed_from_u64(seed);
    let neg = Normal::new(-1.0, 1.0).unwrap();
    let pos = Normal::new(1.0, 1.0).unwrap();

    let mut rows = Vec::with_capacity(n_sample);
    let mut target = Vec::with_capacity(n_sample);
    for i in 0..n_sample {
        let (y, normal) = if i % 2 == 0 { (-1.0, neg) } else { (1.0, pos) };
        let row = (0..n_feature)
            .map(|_| normal.sample(&mut rng))
            .collect::<Vec<f64>>();
        rows.push(row);
        target.push(y);
    }
    Sample::from_rows(&rows[..], target).unwrap()
}


/// Tests for `AdaBoost`.
#[cfg(test)]
pub mod adaboost_tests {
    use super::*;

    #[test]
    fn separable_line() {
        let sample = line_sample(vec![-1.0, -1.0, 1.0, 1.0]);
        let wl = DStump::init(&sample);
        let mut booster = AdaBoost::init(&sample, &sample)
            .rounds(1);

        let f = booster.run(&wl).unwrap();

        let expect = DStumpClassifier::Trained(Split::new(0, 1.0, Polarity::Lte));
        assert_eq!(f.hypotheses(), &[expect]);

        let m = booster.metrics()[0];
        assert_eq!(m.round, 0);
        assert_eq!(m.weighted_error, 0.0);
        assert_eq!(m.train_error, 0.0);
        assert_eq!(m.test_error, 0.0);

        // A perfect stump gets `ln(1 / ε) / 2`.
        let bound = (1.0 / STABILITY_EPSILON).ln() / 2.0;
        assert!(m.alpha.is_finite());
        assert!(m.alpha <= bound + 1e-12, "alpha = {}", m.alpha);
        assert!((m.alpha - bound).abs() < 1e-12);

        // Every weight is scaled by `exp(-alpha) / z = 1/2`.
        for &d in booster.distribution() {
            assert!((d - 0.125).abs() < 1e-12, "weight = {d}");
        }
    }


    #[test]
    fn one_mistake_in_round_zero() {
        // Both `x <= 0` and `x <= 2` misclassify one example;
        // the lower threshold wins.
        let sample = line_sample(vec![-1.0, 1.0, -1.0, 1.0]);
        let wl = DStump::init(&sample);
        let mut booster = AdaBoost::init(&sample, &sample)
            .rounds(1);

        let f = booster.run(&wl).unwrap();
        let expect = DStumpClassifier::Trained(Split::new(0, 0.0, Polarity::Lte));
        assert_eq!(f.hypotheses(), &[expect]);

        let m = booster.metrics()[0];
        assert_eq!(m.weighted_error, 0.25);
        assert!(m.alpha.is_finite() && m.alpha > 0.0);
        assert!((m.alpha - 3f64.ln() / 2.0).abs() < 1e-12);
        assert_eq!(m.train_error, 0.25);

        // Row 2 is the only mistake.
        let dist = booster.distribution();
        assert!((dist[2] - 0.5).abs() < 1e-12);
        for i in [0, 1, 3] {
            assert!((dist[i] - 1.0 / 6.0).abs() < 1e-12, "dist = {dist:?}");
            assert!(dist[2] / 0.25 > dist[i] / 0.25);
        }
        let total = dist.iter().sum::<f64>();
        assert!((total - 1.0).abs() < 1e-12);
    }


    #[test]
    fn flipped_label_is_separable() {
        let sample = line_sample(vec![-1.0, 1.0, 1.0, 1.0]);
        let wl = DStump::init(&sample);
        let mut booster = AdaBoost::init(&sample, &sample)
            .rounds(2);

        let f = booster.run(&wl).unwrap();
        let expect = DStumpClassifier::Trained(Split::new(0, 0.0, Polarity::Lte));
        assert_eq!(f.hypotheses()[0], expect);
        assert_eq!(booster.metrics()[0].weighted_error, 0.0);
        assert_eq!(f.predict_all(&sample), vec![-1, 1, 1, 1]);
    }


    #[test]
    fn zero_rounds() {
        let sample = line_sample(vec![-1.0, -1.0, 1.0, 1.0]);
        let wl = DStump::init(&sample);
        let mut booster = AdaBoost::init(&sample, &sample)
            .rounds(0);

        let f = booster.run(&wl).unwrap();
        assert!(f.is_empty());
        assert!(booster.metrics().is_empty());
        assert_eq!(f.evaluate(&sample), vec![0.0; 4]);
        assert_eq!(f.predict_all(&sample), vec![1; 4]);
        assert_eq!(f.check(&sample), 0.5);
    }


    #[test]
    fn deterministic() {
        let train = blobs(120, 3, 11);
        let test = blobs(60, 3, 12);
        let wl = DStump::init(&train);

        let run = || {
            let mut booster = AdaBoost::init(&train, &test).rounds(25);
            let f = booster.run(&wl).unwrap();
            (f, booster.metrics().to_vec(), booster.distribution().to_vec())
        };
        let (f1, m1, d1) = run();
        let (f2, m2, d2) = run();

        assert_eq!(f1.hypotheses(), f2.hypotheses());
        let bits = |v: &[f64]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(f1.weights()), bits(f2.weights()));
        assert_eq!(bits(&d1), bits(&d2));
        for (a, b) in m1.iter().zip(&m2) {
            assert_eq!(a.alpha.to_bits(), b.alpha.to_bits());
            assert_eq!(a.weighted_error.to_bits(), b.weighted_error.to_bits());
            assert_eq!(a.train_error, b.train_error);
            assert_eq!(a.test_error, b.test_error);
        }
    }


    #[test]
    fn weights_stay_non_negative() {
        let train = blobs(80, 2, 3);
        let wl = DStump::init(&train);
        let mut booster: AdaBoost<'_, DStumpClassifier> =
            AdaBoost::init(&train, &train).rounds(30);

        booster.preprocess().unwrap();
        for iteration in 0.. {
            if booster.boost(&wl, iteration).unwrap().is_break() {
                break;
            }
            assert!(booster.distribution().iter().all(|&d| d >= 0.0));
        }
        assert_eq!(booster.metrics().len(), 30);
    }


    #[test]
    fn metrics_agree_with_the_ensemble() {
        let train = blobs(200, 2, 5);
        let test = blobs(100, 2, 6);
        let wl = DStump::init(&train);
        let mut booster = AdaBoost::init(&train, &test).rounds(40);

        let f = booster.run(&wl).unwrap();
        let last = booster.metrics().last().copied().unwrap();
        assert_eq!(last.round, 39);
        assert_eq!(f.len(), 40);
        assert_eq!(last.train_error, f.check(&train));
        assert_eq!(last.test_error, f.check(&test));
        assert!(last.train_error < 0.2, "train error = {}", last.train_error);

        for (t, m) in booster.metrics().iter().enumerate() {
            assert_eq!(m.round, t);
            assert_eq!(m.alpha, f.weights()[t]);
            assert!(m.weighted_error <= 0.5 + 1e-12);
        }
    }


    #[test]
    fn rerun_starts_from_scratch() {
        let train = blobs(50, 2, 9);
        let wl = DStump::init(&train);
        let mut booster = AdaBoost::init(&train, &train).rounds(5);

        let f1 = booster.run(&wl).unwrap();
        let f2 = booster.run(&wl).unwrap();
        assert_eq!(f1, f2);
        assert_eq!(booster.metrics().len(), 5);
    }


    #[test]
    fn test_dimension_mismatch() {
        let train = line_sample(vec![-1.0, -1.0, 1.0, 1.0]);
        let test = Sample::from_rows(&[[0.0, 1.0]][..], vec![1.0]).unwrap();
        let wl = DStump::init(&train);
        let mut booster = AdaBoost::init(&train, &test);

        let result = booster.run(&wl);
        assert!(matches!(
            result,
            Err(BoostError::ShapeMismatch { expected: 1, got: 2, .. })
        ));
    }


    #[test]
    fn invalid_epsilon() {
        let sample = line_sample(vec![-1.0, -1.0, 1.0, 1.0]);
        let wl = DStump::init(&sample);
        for epsilon in [0.0, -1e-3, 0.5, f64::NAN] {
            let mut booster = AdaBoost::init(&sample, &sample)
                .epsilon(epsilon);
            let result = booster.run(&wl);
            assert!(matches!(
                result,
                Err(BoostError::InvalidParameter { name: "epsilon", .. })
            ));
        }
    }


    #[test]
    fn weighted_error_of_one_breaks_the_weights() {
        // Every candidate predicts `-1` on a constant feature.
        let rows = [[5.0], [5.0]];
        let sample = Sample::from_rows(&rows[..], vec![1.0, 1.0]).unwrap();
        let wl = DStump::init(&sample);
        let mut booster = AdaBoost::init(&sample, &sample).rounds(3);

        let result = booster.run(&wl);
        assert!(matches!(
            result,
            Err(BoostError::NonFiniteWeight { round: 0, row: 0, .. })
        ));
        assert!(booster.metrics().is_empty());
        assert!(booster.ensemble().is_empty());
        // The failed update leaves the weights of round 0 untouched.
        assert_eq!(booster.distribution(), &[0.5, 0.5]);
    }


    #[test]
    fn weak_learner_built_from_another_sample() {
        let train = line_sample(vec![-1.0, -1.0, 1.0, 1.0]);
        let test = Sample::from_rows(
            &[[10.0], [20.0], [30.0], [40.0]][..],
            vec![-1.0, 1.0, -1.0, 1.0],
        ).unwrap();
        let wide = Sample::from_rows(
            &[[0.0, 1.0], [2.0, 3.0]][..], vec![1.0, -1.0]
        ).unwrap();

        for wl in [DStump::init(&test), DStump::init(&wide)] {
            let mut booster = AdaBoost::init(&train, &test).rounds(1);
            let f = booster.run(&wl).unwrap();

            let expect = DStumpClassifier::Trained(Split::new(0, 1.0, Polarity::Lte));
            assert_eq!(f.hypotheses(), &[expect]);
            assert_eq!(booster.metrics()[0].weighted_error, 0.0);
        }
    }


    #[test]
    fn from_config() {
        let sample = line_sample(vec![-1.0, -1.0, 1.0, 1.0]);
        let config = AdaBoostConfig::from_json(r#"{ "rounds": 4 }"#).unwrap();
        let wl = DStump::init(&sample);
        let mut booster = AdaBoost::from_config(&sample, &sample, config);

        let f = booster.run(&wl).unwrap();
        assert_eq!(f.len(), 4);
        assert_eq!(booster.metrics().len(), 4);
    }
}
