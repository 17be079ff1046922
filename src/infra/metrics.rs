// ============================================================
// Layer 6 - Classification Report
// ============================================================
// Evaluation metrics printed at the end of training.
//
// Per class c (over the held-out test set):
//   precision = TP / (TP + FP)   - of messages labelled c, how many were c
//   recall    = TP / (TP + FN)   - of messages that were c, how many we found
//   f1        = 2PR / (P + R)
//   support   = number of test messages whose true label is c
//
// Plus overall accuracy, the unweighted (macro) mean of each
// metric, and the support-weighted mean. A 0/0 ratio is
// reported as 0.0.
//
// Example output:
//                 precision    recall  f1-score   support
//
//            ham       0.97      1.00      0.98       965
//           spam       1.00      0.79      0.88       150
//
//       accuracy                           0.97      1115
//      macro avg       0.98      0.90      0.93      1115
//   weighted avg       0.97      0.97      0.97      1115

use std::fmt;

use crate::domain::label::Label;

/// Precision / recall / F1 / support for one row of the report
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassMetrics {
    pub precision: f64,
    pub recall:    f64,
    pub f1:        f64,
    pub support:   usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationReport {
    /// One entry per label, in `Label::ALL` order
    pub per_class:    Vec<(Label, ClassMetrics)>,
    pub accuracy:     f64,
    pub macro_avg:    ClassMetrics,
    pub weighted_avg: ClassMetrics,
}

impl ClassificationReport {
    /// Compare predictions against ground truth.
    /// Both slices must be the same length.
    pub fn from_predictions(y_true: &[Label], y_pred: &[Label]) -> Self {
        debug_assert_eq!(y_true.len(), y_pred.len());
        let total = y_true.len();

        let per_class: Vec<(Label, ClassMetrics)> = Label::ALL
            .iter()
            .map(|&label| {
                let pairs = || y_true.iter().zip(y_pred);
                let tp = pairs().filter(|&(&t, &p)| t == label && p == label).count();
                let fp = pairs().filter(|&(&t, &p)| t != label && p == label).count();
                let fn_ = pairs().filter(|&(&t, &p)| t == label && p != label).count();

                let precision = ratio(tp, tp + fp);
                let recall    = ratio(tp, tp + fn_);
                let f1        = if precision + recall > 0.0 {
                    2.0 * precision * recall / (precision + recall)
                } else {
                    0.0
                };
                (label, ClassMetrics { precision, recall, f1, support: tp + fn_ })
            })
            .collect();

        let correct  = y_true.iter().zip(y_pred).filter(|(t, p)| t == p).count();
        let accuracy = ratio(correct, total);

        let n_classes = per_class.len() as f64;
        let macro_avg = ClassMetrics {
            precision: per_class.iter().map(|(_, m)| m.precision).sum::<f64>() / n_classes,
            recall:    per_class.iter().map(|(_, m)| m.recall).sum::<f64>() / n_classes,
            f1:        per_class.iter().map(|(_, m)| m.f1).sum::<f64>() / n_classes,
            support:   total,
        };

        let weighted = |f: fn(&ClassMetrics) -> f64| {
            if total == 0 {
                return 0.0;
            }
            per_class.iter().map(|(_, m)| f(m) * m.support as f64).sum::<f64>() / total as f64
        };
        let weighted_avg = ClassMetrics {
            precision: weighted(|m| m.precision),
            recall:    weighted(|m| m.recall),
            f1:        weighted(|m| m.f1),
            support:   total,
        };

        Self { per_class, accuracy, macro_avg, weighted_avg }
    }

    pub fn metrics_for(&self, label: Label) -> Option<&ClassMetrics> {
        self.per_class.iter().find(|(l, _)| *l == label).map(|(_, m)| m)
    }
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 { 0.0 } else { num as f64 / den as f64 }
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>12} {:>9} {:>9} {:>9} {:>9}", "", "precision", "recall", "f1-score", "support")?;
        writeln!(f)?;
        for (label, m) in &self.per_class {
            write_row(f, label.as_str(), m)?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{:>12} {:>9} {:>9} {:>9.2} {:>9}",
            "accuracy", "", "", self.accuracy, self.macro_avg.support
        )?;
        write_row(f, "macro avg", &self.macro_avg)?;
        write_row(f, "weighted avg", &self.weighted_avg)
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, name: &str, m: &ClassMetrics) -> fmt::Result {
    writeln!(
        f,
        "{:>12} {:>9.2} {:>9.2} {:>9.2} {:>9}",
        name, m.precision, m.recall, m.f1, m.support
    )
}
