//! Invitation message templating
//!
//! Small registry of named text templates rendered per guest. Venue, date
//! and link content comes from the deployment [`EventConfig`]; only the
//! guest name and invitation link vary per render. Rendering is pure
//! substitution and never touches guest state.

use crate::{ClientResult, EventConfig};
use shared::Guest;
use tera::{Context, Tera};

/// Built-in guest-addressed variant
pub const VARIANT_GUEST: &str = "guest";

/// Built-in family-addressed variant (invitation sent on behalf of the
/// couple's parents)
pub const VARIANT_FAMILY: &str = "family";

const GUEST_TEMPLATE: &str = "\
Kepada Yth.
Bapak/Ibu/Saudara/i
*{{ guest_name }}*
Di Tempat

Tanpa mengurangi rasa hormat, perkenankan kami mengundang Bapak/Ibu/Saudara/i untuk menghadiri acara pernikahan kami:

*{{ event_title }}*

Berikut link undangan kami, untuk info lengkap dari acara bisa kunjungi:

{{ invitation_link }}

Link Maps:
{{ maps_link }}

Merupakan suatu kehormatan dan kebahagiaan bagi kami apabila Bapak/Ibu/Saudara/i berkenan untuk hadir dan memberikan doa restu.

Kami yang berbahagia,
*{{ guest_signature }}*";

const FAMILY_TEMPLATE: &str = "\
Kepada Yth.
Bapak/Ibu/Saudara/i
*{{ guest_name }}*
Di Tempat

Tanpa mengurangi rasa hormat, perkenankan kami mengundang Bapak/Ibu/Saudara/i untuk menghadiri acara pernikahan anak kami:

*{{ event_title }}*

Berikut link undangan kami, untuk info lengkap dari acara bisa kunjungi:

{{ invitation_link }}

Link Maps:
{{ maps_link }}

Merupakan suatu kehormatan dan kebahagiaan bagi kami apabila Bapak/Ibu/Saudara/i berkenan untuk hadir dan memberikan doa restu.

Kami yang berbahagia,
*{{ family_signature }}*";

/// Invitation template registry keyed by variant name
pub struct InvitationTemplates {
    tera: Tera,
    event: EventConfig,
}

impl InvitationTemplates {
    /// Create a registry with the built-in `guest` and `family` variants
    pub fn new(event: EventConfig) -> ClientResult<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(VARIANT_GUEST, GUEST_TEMPLATE)?;
        tera.add_raw_template(VARIANT_FAMILY, FAMILY_TEMPLATE)?;
        // Messages are plain text, not markup
        tera.autoescape_on(vec![]);
        Ok(Self { tera, event })
    }

    /// Register an additional variant; replaces any variant with the same name
    pub fn register(&mut self, name: &str, body: &str) -> ClientResult<()> {
        self.tera.add_raw_template(name, body)?;
        Ok(())
    }

    /// Registered variant names, sorted
    pub fn variants(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tera.get_template_names().collect();
        names.sort_unstable();
        names
    }

    /// Deployment configuration backing the templates
    pub fn event(&self) -> &EventConfig {
        &self.event
    }

    /// Render the invitation message for one guest
    ///
    /// Fails on an unknown variant or an unresolved placeholder.
    pub fn render(&self, variant: &str, guest: &Guest) -> ClientResult<String> {
        let mut context = Context::new();
        context.insert("guest_name", &guest.guest_name);
        context.insert("invitation_link", &guest.invitation_link);
        context.insert("event_title", &self.event.event_title);
        context.insert("maps_link", &self.event.maps_link);
        context.insert("guest_signature", &self.event.guest_signature);
        context.insert("family_signature", &self.event.family_signature);

        Ok(self.tera.render(variant, &context)?)
    }
}
