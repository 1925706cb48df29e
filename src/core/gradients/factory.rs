use crate::core::gradients::{gradient::Gradient, kinds::GradientKinds};

#[must_use]
pub fn gradient_factory(kind: GradientKinds) -> Gradient {
    Gradient::new(kind.symbols().chars()).expect("built-in gradients are never empty")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(GradientKinds::ALL.first(), Some(&GradientKinds::default()));
    }

    #[test]
    fn classic_gradient_has_ten_symbols() {
        let gradient = gradient_factory(GradientKinds::Classic);

        assert_eq!(
            gradient.symbols(),
            &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@']
        );
    }

    #[test]
    fn every_gradient_starts_blank() {
        for &kind in GradientKinds::ALL {
            assert_eq!(gradient_factory(kind).first(), ' ', "{kind}");
        }
    }

    #[test]
    fn names_round_trip() {
        for &kind in GradientKinds::ALL {
            assert_eq!(GradientKinds::from_name(kind.name()), Some(kind));
        }
        assert_eq!(GradientKinds::from_name("rainbow"), None);
    }

    #[test]
    fn display_names_are_unique() {
        let names: Vec<&str> = GradientKinds::ALL
            .iter()
            .map(|k| k.display_name())
            .collect();
        for (i, name) in names.iter().enumerate() {
            for (j, other) in names.iter().enumerate() {
                if i != j {
                    assert_ne!(name, other, "Duplicate display name: {}", name);
                }
            }
        }
    }
}
