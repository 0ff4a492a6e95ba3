use serde::{Deserialize, Serialize};

/// Descriptions of the three parts one factory produces.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VehicleParts {
    pub body: String,
    pub chassis: String,
    pub glassware: String,
}

impl VehicleParts {
    pub fn new<S: Into<String>>(body: S, chassis: S, glassware: S) -> Self {
        Self {
            body: body.into(),
            chassis: chassis.into(),
            glassware: glassware.into(),
        }
    }

    /// Returns the descriptions in body, chassis, glassware order.
    pub fn as_array(&self) -> [&str; 3] {
        [&self.body, &self.chassis, &self.glassware]
    }
}

/// Parts for several vehicles, split per part type in selection order.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PartsSummary {
    pub bodies: Vec<String>,
    pub chassis: Vec<String>,
    pub glassware: Vec<String>,
}

impl PartsSummary {
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl FromIterator<VehicleParts> for PartsSummary {
    fn from_iter<I: IntoIterator<Item = VehicleParts>>(iter: I) -> Self {
        let mut summary = Self::default();
        for parts in iter {
            summary.bodies.push(parts.body);
            summary.chassis.push(parts.chassis);
            summary.glassware.push(parts.glassware);
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_keeps_order() {
        let summary: PartsSummary = vec![
            VehicleParts::new("Van Body Parts", "Van Chassis Parts", "Van Glass Parts"),
            VehicleParts::new("Car Body Parts", "Car Chassis Parts", "Car Glass Parts"),
        ]
        .into_iter()
        .collect();

        assert_eq!(summary.len(), 2);
        assert_eq!(summary.bodies, vec!["Van Body Parts", "Car Body Parts"]);
        assert_eq!(summary.glassware[1], "Car Glass Parts");
    }
}
