//! Five-element relation resolver.

use palm_core::models::Relation;
use palm_core::symbols::Element;

/// Classify the interaction of `host` with `guest`.
///
/// Rules are checked in order; the first match wins.
pub fn resolve(host: Element, guest: Element) -> Relation {
    if guest.produces() == host {
        Relation::NourishesHost
    } else if host == guest {
        Relation::Peer
    } else if host.produces() == guest {
        Relation::HostExerts
    } else if host.controls() == guest {
        Relation::HostStrains
    } else if guest.controls() == host {
        Relation::HostAfflicted
    } else {
        Relation::Indeterminate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_element_is_peer() {
        for e in Element::ALL {
            assert_eq!(resolve(e, e), Relation::Peer);
            assert_eq!(resolve(e, e).score(), 75);
        }
    }

    #[test]
    fn score_ladder() {
        // water is produced by metal
        assert_eq!(resolve(Element::Water, Element::Metal), Relation::NourishesHost);
        assert_eq!(resolve(Element::Water, Element::Metal).score(), 80);
        assert_eq!(resolve(Element::Water, Element::Wood), Relation::HostExerts);
        assert_eq!(resolve(Element::Water, Element::Wood).score(), 60);
        assert_eq!(resolve(Element::Water, Element::Fire), Relation::HostStrains);
        assert_eq!(resolve(Element::Water, Element::Fire).score(), 35);
        assert_eq!(resolve(Element::Water, Element::Earth), Relation::HostAfflicted);
        assert_eq!(resolve(Element::Water, Element::Earth).score(), 20);
    }

    #[test]
    fn relation_is_asymmetric() {
        assert_eq!(resolve(Element::Wood, Element::Water), Relation::NourishesHost);
        assert_eq!(resolve(Element::Water, Element::Wood), Relation::HostExerts);
        assert_ne!(
            resolve(Element::Fire, Element::Metal),
            resolve(Element::Metal, Element::Fire)
        );
    }

    #[test]
    fn every_pair_is_classified() {
        for host in Element::ALL {
            for guest in Element::ALL {
                assert_ne!(resolve(host, guest), Relation::Indeterminate);
            }
        }
    }
}
