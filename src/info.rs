//! Info overlay for the focused planet.

use crate::bodies::Body;

/// What the detail card shows. Built on demand from the selection; holds no
/// state of its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfoCard {
    pub body: Body,
    pub title: &'static str,
    pub description: &'static str,
    pub facts: &'static [&'static str],
}

impl InfoCard {
    /// `None` when nothing is selected.
    pub fn for_selection(selected: Option<Body>) -> Option<Self> {
        selected.map(|body| {
            let rec = body.record();
            Self {
                body,
                title: rec.name,
                description: rec.description,
                facts: rec.facts,
            }
        })
    }

    /// Header of the collapsible card, e.g. "Mars Details".
    pub fn heading(&self) -> String {
        format!("{} Details", self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SimulationState;

    #[test]
    fn empty_selection_shows_nothing() {
        assert!(InfoCard::for_selection(None).is_none());
    }

    #[test]
    fn select_then_clear_closes_card_for_every_body() {
        let mut sim = SimulationState::default();
        for body in Body::ALL {
            sim.select(Some(body));
            let card = InfoCard::for_selection(sim.selected()).unwrap();
            assert_eq!(card.title, body.name());
            assert_eq!(card.facts, body.record().facts);
            sim.select(None);
            assert!(InfoCard::for_selection(sim.selected()).is_none());
        }
    }

    #[test]
    fn heading_names_the_planet() {
        let card = InfoCard::for_selection(Some(Body::Mars)).unwrap();
        assert_eq!(card.heading(), "Mars Details");
    }
}
