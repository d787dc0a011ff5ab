// File: crates/chart-core/src/dataset.rs
// Summary: Canned sample tables behind each gallery chart (MPG and USArrests derived).

/// One named series of values aligned with a table's category labels.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    pub label: &'static str,
    pub values: Vec<f64>,
}

/// Category labels plus one or more aligned series.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryTable {
    pub labels: Vec<&'static str>,
    pub datasets: Vec<Dataset>,
}

impl CategoryTable {
    /// Every dataset has exactly one value per label.
    pub fn is_aligned(&self) -> bool {
        self.datasets.iter().all(|d| d.values.len() == self.labels.len())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxStats {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl BoxStats {
    pub const fn new(min: f64, q1: f64, median: f64, q3: f64, max: f64) -> Self {
        Self { min, q1, median, q3, max }
    }

    pub fn as_array(&self) -> [f64; 5] {
        [self.min, self.q1, self.median, self.q3, self.max]
    }

    /// min <= q1 <= median <= q3 <= max
    pub fn is_ordered(&self) -> bool {
        self.as_array().windows(2).all(|w| w[0] <= w[1])
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ErrorDataset {
    pub label: &'static str,
    pub values: Vec<f64>,
    pub errors: Vec<f64>,
}

const YEARS: [&str; 10] = ["1999", "2000", "2001", "2002", "2003", "2004", "2005", "2006", "2007", "2008"];
const CRIMES: [&str; 3] = ["Murder", "Assault", "Rape"];

pub fn line() -> CategoryTable {
    CategoryTable {
        labels: YEARS.to_vec(),
        datasets: vec![
            Dataset {
                label: "City MPG (cty)",
                values: vec![18.5, 18.7, 18.9, 19.1, 19.3, 19.5, 19.7, 19.9, 20.1, 20.3],
            },
            Dataset {
                label: "Highway MPG (hwy)",
                values: vec![26.5, 26.8, 27.1, 27.4, 27.7, 28.0, 28.3, 28.6, 28.9, 29.2],
            },
        ],
    }
}

pub fn bar() -> CategoryTable {
    CategoryTable {
        labels: CRIMES.to_vec(),
        datasets: vec![Dataset { label: "Crime rate", values: vec![7.8, 173.8, 21.2] }],
    }
}

/// Grouped variant of [`bar`]: crime rates per state group.
pub fn multi_bar() -> CategoryTable {
    CategoryTable {
        labels: vec!["Low-crime states", "Mid-crime states", "High-crime states"],
        datasets: vec![
            Dataset { label: "Murder rate", values: vec![2.5, 7.5, 15.2] },
            Dataset { label: "Assault rate", values: vec![85.3, 173.8, 280.5] },
            Dataset { label: "Rape rate", values: vec![12.3, 21.2, 35.8] },
        ],
    }
}

pub fn horizontal_bar() -> CategoryTable {
    CategoryTable {
        labels: vec!["Compact", "Midsize", "SUV", "Pickup", "Subcompact", "2-seater", "Minivan"],
        datasets: vec![Dataset {
            label: "Average city MPG",
            values: vec![22.4, 18.7, 13.5, 13.2, 25.8, 16.5, 21.2],
        }],
    }
}

pub fn area() -> CategoryTable {
    CategoryTable {
        labels: YEARS.to_vec(),
        datasets: vec![
            Dataset {
                label: "Compact",
                values: vec![185.0, 190.0, 195.0, 200.0, 205.0, 210.0, 215.0, 220.0, 225.0, 230.0],
            },
            Dataset {
                label: "Midsize",
                values: vec![150.0, 155.0, 160.0, 165.0, 170.0, 175.0, 180.0, 185.0, 190.0, 195.0],
            },
            Dataset {
                label: "SUV",
                values: vec![120.0, 125.0, 130.0, 135.0, 140.0, 145.0, 150.0, 155.0, 160.0, 165.0],
            },
        ],
    }
}

pub fn pie() -> CategoryTable {
    CategoryTable {
        labels: vec!["Compact", "Midsize", "SUV", "Pickup", "Subcompact", "2-seater", "Minivan", "Other"],
        datasets: vec![Dataset {
            label: "Vehicle class",
            values: vec![28.0, 22.0, 18.0, 12.0, 8.0, 6.0, 4.0, 2.0],
        }],
    }
}

/// (displacement in litres, highway MPG)
pub fn scatter() -> (&'static str, Vec<(f64, f64)>) {
    (
        "Displacement vs highway MPG",
        vec![
            (1.8, 29.0), (2.0, 31.0), (2.4, 27.0), (2.8, 26.0),
            (3.0, 25.0), (3.3, 24.0), (3.5, 26.0), (3.8, 25.0),
            (4.0, 23.0), (4.2, 23.0), (4.6, 19.0), (4.7, 19.0),
            (5.0, 17.0), (5.2, 15.0), (5.3, 19.0), (5.4, 17.0),
            (5.7, 23.0), (5.9, 15.0), (6.0, 17.0), (6.2, 25.0),
        ],
    )
}

pub fn boxplot() -> (Vec<&'static str>, &'static str, Vec<BoxStats>) {
    (
        vec!["Murder rate", "Assault rate", "Rape rate"],
        "Crime rate",
        vec![
            BoxStats::new(0.8, 3.2, 7.25, 11.25, 17.4),
            BoxStats::new(45.0, 109.0, 159.0, 249.0, 337.0),
            BoxStats::new(7.3, 15.8, 20.1, 26.0, 46.0),
        ],
    )
}

pub fn radar() -> CategoryTable {
    CategoryTable {
        labels: vec!["Murder rate", "Assault rate", "Urban population %", "Rape rate"],
        datasets: vec![
            Dataset { label: "Low-crime states", values: vec![2.5, 85.3, 65.2, 12.3] },
            Dataset { label: "Mid-crime states", values: vec![7.5, 173.8, 72.5, 21.2] },
            Dataset { label: "High-crime states", values: vec![15.2, 280.5, 58.3, 35.8] },
        ],
    }
}

pub fn error_bar() -> (Vec<&'static str>, Vec<ErrorDataset>) {
    (
        vec!["Compact", "Midsize", "SUV", "Pickup", "Subcompact"],
        vec![
            ErrorDataset {
                label: "City MPG",
                values: vec![22.4, 18.7, 13.5, 13.2, 25.8],
                errors: vec![1.2, 0.9, 1.5, 1.8, 1.1],
            },
            ErrorDataset {
                label: "Highway MPG",
                values: vec![31.2, 26.8, 18.5, 17.9, 33.5],
                errors: vec![1.5, 1.2, 1.8, 2.1, 1.4],
            },
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_tables_are_aligned() {
        for t in [line(), bar(), multi_bar(), horizontal_bar(), area(), pie(), radar()] {
            assert!(t.is_aligned(), "misaligned table: {:?}", t.labels);
        }
    }

    #[test]
    fn box_stats_are_ordered() {
        let (labels, _, boxes) = boxplot();
        assert_eq!(labels.len(), boxes.len());
        assert!(boxes.iter().all(BoxStats::is_ordered));
    }

    #[test]
    fn error_bars_match_values() {
        let (labels, sets) = error_bar();
        for s in sets {
            assert_eq!(s.values.len(), labels.len());
            assert_eq!(s.errors.len(), labels.len());
        }
    }
}
