use palm_core::symbols::*;
use proptest::prelude::*;

#[test]
fn branch_table_matches_reference() {
    let expected = [
        ("子", "天貴星", Element::Water),
        ("丑", "天厄星", Element::Earth),
        ("寅", "天權星", Element::Wood),
        ("卯", "天破星", Element::Wood),
        ("辰", "天奸星", Element::Earth),
        ("巳", "天文星", Element::Fire),
        ("午", "天福星", Element::Fire),
        ("未", "天驛星", Element::Earth),
        ("申", "天孤星", Element::Metal),
        ("酉", "天刃星", Element::Metal),
        ("戌", "天藝星", Element::Earth),
        ("亥", "天壽星", Element::Water),
    ];
    for (i, (label, star, element)) in expected.into_iter().enumerate() {
        let b = Branch::from_index(i);
        assert_eq!(b.label(), label);
        assert_eq!(b.star().name(), star);
        assert_eq!(b.element(), element);
    }
}

#[test]
fn tier_modifiers() {
    assert_eq!(Star::TianGui.tier().modifier(), 30);
    assert_eq!(Star::TianWen.tier().modifier(), 10);
    assert_eq!(Star::TianJian.tier().modifier(), -20);
}

#[test]
fn aspect_order_starts_with_aggregate() {
    assert_eq!(Aspect::ALL[0], Aspect::OverallDestiny);
    assert!(Aspect::OverallDestiny.is_aggregate());
    assert_eq!(Aspect::ALL[11].name(), "錢財");
    for (i, a) in Aspect::ALL.into_iter().enumerate() {
        assert_eq!(a.slot(), i);
        assert_eq!(a.is_aggregate(), i == 0);
    }
}

#[test]
fn branch_serializes_as_romanization() {
    assert_eq!(serde_json::to_string(&Branch::Shen).unwrap(), "\"shen\"");
    assert_eq!(serde_json::to_string(&Star::TianYiArt).unwrap(), "\"tian_yi_art\"");
}

proptest! {
    #[test]
    fn from_index_is_modular(i in 0usize..10_000) {
        prop_assert_eq!(Branch::from_index(i).index(), i % 12);
    }

    #[test]
    fn star_binding_is_a_bijection(i in 0usize..12) {
        let b = Branch::from_index(i);
        prop_assert_eq!(b.star().branch(), b);
    }
}
