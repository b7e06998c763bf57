//! Per-version property table for the contact format.

use super::{FormatVersion, PropertySpec, Role};

use super::Cardinality::{Any, AtLeastOne, ExactlyOne, MayBeOne};
use super::SlotKind::{Part, String as StringSlot};
use super::ValueKind as V;

/// Resolves a contact property name under a vCard version.
///
/// Names absent from a generation (ANNIVERSARY before 4.0, LABEL after
/// 3.0) deliberately fall through to the extension slot there: the value
/// is preserved, just not interpreted.
#[must_use]
pub fn lookup(version: FormatVersion, name: &str) -> PropertySpec {
    let v4 = version == FormatVersion::VCard40;
    let name = name.to_ascii_uppercase();

    match name.as_str() {
        "FN" => {
            let cardinality = match version {
                FormatVersion::VCard21 => MayBeOne,
                FormatVersion::VCard30 => ExactlyOne,
                _ => AtLeastOne,
            };
            PropertySpec::new(Role::FormattedName, StringSlot, V::Text, cardinality, v4)
        }
        "N" => {
            let cardinality = if v4 { MayBeOne } else { ExactlyOne };
            PropertySpec::new(Role::Name, Part, V::StructuredName, cardinality, v4)
        }
        "NICKNAME" if version != FormatVersion::VCard21 => {
            PropertySpec::new(Role::Nickname, Part, V::TextList, Any, v4)
        }
        "PHOTO" => PropertySpec::new(Role::Photo, Part, V::Media, Any, v4),
        "BDAY" => PropertySpec::new(Role::Birthday, Part, V::DateAndOrTime, MayBeOne, v4),
        "ANNIVERSARY" if v4 => {
            PropertySpec::new(Role::Anniversary, Part, V::DateAndOrTime, MayBeOne, true)
        }
        "GENDER" if v4 => PropertySpec::new(Role::Gender, Part, V::Gender, MayBeOne, false),
        "ADR" => PropertySpec::new(Role::Address, Part, V::Address, Any, v4),
        "LABEL" if !v4 => PropertySpec::new(Role::Label, StringSlot, V::Text, Any, false),
        "TEL" => PropertySpec::new(Role::Telephone, StringSlot, V::Text, Any, v4),
        "EMAIL" => PropertySpec::new(Role::Email, StringSlot, V::Text, Any, v4),
        "MAILER" if !v4 => PropertySpec::new(Role::Mailer, StringSlot, V::Text, MayBeOne, false),
        "IMPP" if version != FormatVersion::VCard21 => {
            PropertySpec::new(Role::Impp, StringSlot, V::Uri, Any, v4)
        }
        "LANG" if v4 => PropertySpec::new(Role::Language, StringSlot, V::Text, Any, true),
        "TZ" => {
            // 4.0 widened TZ to text; the older generations carry an offset.
            if v4 {
                PropertySpec::new(Role::TimeZone, StringSlot, V::Text, Any, true)
            } else {
                PropertySpec::new(Role::TimeZone, Part, V::UtcOffset, MayBeOne, false)
            }
        }
        "GEO" => PropertySpec::new(Role::Geo, Part, V::Geo, if v4 { Any } else { MayBeOne }, v4),
        "TITLE" => PropertySpec::new(Role::Title, StringSlot, V::Text, Any, v4),
        "ROLE" => PropertySpec::new(Role::OrgRole, StringSlot, V::Text, Any, v4),
        "LOGO" => PropertySpec::new(Role::Logo, Part, V::Media, Any, v4),
        "ORG" => PropertySpec::new(Role::Organization, Part, V::Organization, Any, v4),
        "MEMBER" if v4 => PropertySpec::new(Role::Member, StringSlot, V::Uri, Any, false),
        "RELATED" if v4 => PropertySpec::new(Role::Related, StringSlot, V::Text, Any, true),
        "CATEGORIES" if version != FormatVersion::VCard21 => {
            PropertySpec::new(Role::Categories, Part, V::TextList, Any, v4)
        }
        "NOTE" => PropertySpec::new(Role::Note, StringSlot, V::Text, Any, v4),
        "PRODID" if version != FormatVersion::VCard21 => {
            PropertySpec::new(Role::ProdId, StringSlot, V::Text, MayBeOne, false)
        }
        "REV" => PropertySpec::new(Role::Revision, Part, V::DateAndOrTime, MayBeOne, false),
        "SOUND" => PropertySpec::new(Role::Sound, Part, V::Media, Any, v4),
        "UID" => PropertySpec::new(Role::Uid, StringSlot, V::Text, MayBeOne, false),
        "URL" => PropertySpec::new(Role::Url, StringSlot, V::Uri, Any, v4),
        "KEY" => PropertySpec::new(Role::Key, Part, V::Media, Any, v4),
        "SOURCE" if version != FormatVersion::VCard21 => {
            PropertySpec::new(Role::Source, StringSlot, V::Uri, Any, false)
        }
        "KIND" if v4 => PropertySpec::new(Role::Kind, StringSlot, V::Text, MayBeOne, false),
        _ => PropertySpec::extension(&name),
    }
}

/// Roles a card must carry under each generation.
#[must_use]
pub fn required_roles(version: FormatVersion) -> &'static [Role] {
    match version {
        FormatVersion::VCard21 => &[Role::Name],
        FormatVersion::VCard30 => &[Role::FormattedName, Role::Name],
        _ => &[Role::FormattedName],
    }
}
