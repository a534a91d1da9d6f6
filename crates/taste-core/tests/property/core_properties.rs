use proptest::prelude::*;
use taste_core::models::UserDomainProfile;
use taste_core::{Confidence, Domain};

proptest! {
    #[test]
    fn confidence_is_always_in_unit_range(raw in proptest::num::f64::ANY) {
        let c = Confidence::new(raw).value();
        prop_assert!((0.0..=1.0).contains(&c));
    }

    #[test]
    fn domain_names_parse_regardless_of_case(
        domain in prop::sample::select(Domain::ALL.to_vec()),
        upper in any::<bool>(),
    ) {
        let name = if upper {
            domain.as_str().to_uppercase()
        } else {
            domain.as_str().to_lowercase()
        };
        prop_assert_eq!(name.parse::<Domain>().ok(), Some(domain));
    }

    #[test]
    fn profile_weights_are_clamped(
        domain in prop::sample::select(Domain::ALL.to_vec()),
        weight in -10.0f64..10.0,
    ) {
        let w = UserDomainProfile::empty().with_weight(domain, weight).weight(domain);
        prop_assert!((0.0..=1.0).contains(&w));
    }
}
