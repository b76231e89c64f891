//! The eight input parameters and the feature vector built from them.

use std::fmt::Write;

use ndarray::{Array2, ArrayView1};

/// Number of input parameters, and therefore columns of the feature vector.
pub const FIELD_COUNT: usize = 8;

/// Physical unit a parameter is entered in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldUnit {
    /// Length in millimetres.
    Millimetre,
    /// Dimensionless count.
    Count,
    /// Stress in megapascals.
    Megapascal,
}

impl FieldUnit {
    /// Short symbol for display.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            FieldUnit::Millimetre => "mm",
            FieldUnit::Count => "-",
            FieldUnit::Megapascal => "MPa",
        }
    }
}

/// Static description of one input parameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldDefinition {
    /// Internal key, also used in validation messages.
    pub key: &'static str,
    /// Label shown next to the entry.
    pub label: &'static str,
    /// Smallest accepted value.
    pub min: f64,
    /// Largest accepted value.
    pub max: f64,
    /// Unit the value is entered in.
    pub unit: FieldUnit,
}

impl FieldDefinition {
    /// Whether `value` lies in the inclusive range of this field.
    ///
    /// NaN is never accepted.
    ///
    /// # Examples
    /// ```
    /// use webcrippling::FIELDS;
    ///
    /// let web = FIELDS[0];
    /// assert!(web.accepts(150.0));
    /// assert!(web.accepts(250.0));
    /// assert!(!web.accepts(149.0));
    /// assert!(!web.accepts(f64::NAN));
    /// ```
    #[must_use]
    pub fn accepts(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Key with underscores replaced by spaces, e.g. `Corner radius`.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.key.replace('_', " ")
    }

    /// Centre of the accepted range.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// The input parameters in feature-vector column order.
pub const FIELDS: [FieldDefinition; FIELD_COUNT] = [
    FieldDefinition {
        key: "Web",
        label: "Web (D)",
        min: 150.0,
        max: 250.0,
        unit: FieldUnit::Millimetre,
    },
    FieldDefinition {
        key: "Flange",
        label: "Flange (Bf)",
        min: 45.0,
        max: 65.0,
        unit: FieldUnit::Millimetre,
    },
    FieldDefinition {
        key: "Thickness",
        label: "Thickness (t)",
        min: 1.0,
        max: 2.0,
        unit: FieldUnit::Millimetre,
    },
    FieldDefinition {
        key: "Corner_radius",
        label: "Corner radius (Ri)",
        min: 3.0,
        max: 5.0,
        unit: FieldUnit::Millimetre,
    },
    FieldDefinition {
        key: "Slot_length",
        label: "Slot length (Lsl)",
        min: 60.0,
        max: 75.0,
        unit: FieldUnit::Millimetre,
    },
    FieldDefinition {
        key: "Slot_rows",
        label: "Slot rows (n)",
        min: 6.0,
        max: 12.0,
        unit: FieldUnit::Count,
    },
    FieldDefinition {
        key: "Bearing_plate",
        label: "Bearing plate (lb)",
        min: 50.0,
        max: 150.0,
        unit: FieldUnit::Millimetre,
    },
    FieldDefinition {
        key: "Yield_strength",
        label: "Yield strength (Fy)",
        min: 300.0,
        max: 500.0,
        unit: FieldUnit::Megapascal,
    },
];

/// Validated parameters in [`FIELDS`] order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeatureVector([f64; FIELD_COUNT]);

impl FeatureVector {
    /// Wrap already validated values.
    #[must_use]
    pub const fn new(values: [f64; FIELD_COUNT]) -> Self {
        Self(values)
    }

    /// Values in column order.
    #[must_use]
    pub fn values(&self) -> &[f64; FIELD_COUNT] {
        &self.0
    }

    /// Borrow the values as a one-dimensional array.
    #[must_use]
    pub fn view(&self) -> ArrayView1<'_, f64> {
        ArrayView1::from(&self.0[..])
    }

    /// Lay the vector out as a single-sample matrix of shape `1 x 8`.
    ///
    /// # Examples
    /// ```
    /// use webcrippling::FeatureVector;
    ///
    /// let sample = FeatureVector::new([200.0, 55.0, 1.5, 4.0, 67.0, 9.0, 100.0, 400.0]);
    /// let matrix = sample.to_sample_matrix();
    /// assert_eq!(matrix.dim(), (1, 8));
    /// assert_eq!(matrix[[0, 7]], 400.0);
    /// ```
    #[must_use]
    pub fn to_sample_matrix(&self) -> Array2<f64> {
        self.view().insert_axis(ndarray::Axis(0)).to_owned()
    }
}

/// Render the static block listing every accepted range.
///
/// One `<key>: Min: <min>, Max: <max>` line per field in column order.
#[must_use]
pub fn range_help_text() -> String {
    let mut output = String::new();
    for (idx, field) in FIELDS.iter().enumerate() {
        if idx > 0 {
            output.push('\n');
        }
        write!(
            &mut output,
            "{}: Min: {}, Max: {}",
            field.key, field.min, field.max
        )
        .expect("writing to string cannot fail");
    }
    output
}

/// Note printed under the range block.
pub const UNITS_NOTE: &str = "*Dimensions are in mm";
