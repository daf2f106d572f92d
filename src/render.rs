use crate::models::{ActivityCatalog, ActivityDetails};
use crate::view::{
    ActivityCard, ActivityList, ActivitySelect, NO_PARTICIPANTS, ParticipantEntry,
    ParticipantSection, RemoveControl, SelectOption,
};

/// Replaces the list and the activity options with a projection of `catalog`.
pub fn render_catalog(catalog: &ActivityCatalog, list: &mut ActivityList, select: &mut ActivitySelect) {
    let cards = catalog
        .iter()
        .map(|(name, details)| build_card(name, details))
        .collect();
    list.set_cards(cards);

    let mut options = Vec::with_capacity(catalog.len() + 1);
    options.push(SelectOption::placeholder());
    options.extend(catalog.keys().map(|name| SelectOption::activity(name)));
    select.replace_options(options);
}

pub fn build_card(name: &str, details: &ActivityDetails) -> ActivityCard {
    let participants = if details.participants.is_empty() {
        ParticipantSection::Placeholder(NO_PARTICIPANTS.to_string())
    } else {
        ParticipantSection::Entries(
            details
                .participants
                .iter()
                .map(|email| ParticipantEntry {
                    email: email.clone(),
                    remove: RemoveControl {
                        activity: name.to_string(),
                        email: email.clone(),
                    },
                })
                .collect(),
        )
    };

    ActivityCard {
        name: name.to_string(),
        description: details.description.clone(),
        schedule: details.schedule.clone(),
        capacity: details.capacity_label(),
        participants,
    }
}
