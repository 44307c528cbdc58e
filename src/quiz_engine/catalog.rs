//! Static hero catalog — the fixed registry of guessable entries.
//!
//! The catalog is compiled in and immutable: every entry carries the hero's
//! primary attribute, its role tags, and a short hint line.  Lookup is by id,
//! by attribute, or by role; there is no way to add or remove entries at
//! runtime.

use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Entry metadata
// ---------------------------------------------------------------------------

/// Primary attribute of a hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Attribute {
    Strength,
    Agility,
    Intelligence,
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attribute::Strength     => write!(f, "Strength"),
            Attribute::Agility      => write!(f, "Agility"),
            Attribute::Intelligence => write!(f, "Intelligence"),
        }
    }
}

/// Role tag attached to a hero.  A hero may carry several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Carry,
    Support,
    Initiator,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Carry     => write!(f, "Carry"),
            Role::Support   => write!(f, "Support"),
            Role::Initiator => write!(f, "Initiator"),
        }
    }
}

/// One catalog entry.  Ids double as asset file names and answer identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroEntry {
    pub id: &'static str,
    pub attribute: Attribute,
    pub roles: &'static [Role],
    pub hint: &'static str,
}

const fn entry(
    id: &'static str, attribute: Attribute,
    roles: &'static [Role], hint: &'static str,
) -> HeroEntry {
    HeroEntry { id, attribute, roles, hint }
}

// ---------------------------------------------------------------------------
// The registry
// ---------------------------------------------------------------------------

/// Every guessable hero, in catalog order.
pub const HEROES: &[HeroEntry] = &[
    entry("abaddon", Attribute::Strength, &[Role::Support, Role::Carry], "Mist coil and shield"),
    entry("alchemist", Attribute::Strength, &[Role::Carry], "Greedy farmer"),
    entry("ancient_apparition", Attribute::Intelligence, &[Role::Support], "Ice magic"),
    entry("anti-mage", Attribute::Agility, &[Role::Carry], "Magic hater"),
    entry("arc_warden", Attribute::Agility, &[Role::Carry], "Creates a copy"),
    entry("axe", Attribute::Strength, &[Role::Initiator], "Spins to win"),
    entry("bane", Attribute::Intelligence, &[Role::Support], "Nightmare"),
    entry("batrider", Attribute::Intelligence, &[Role::Initiator], "Rides a bat"),
    entry("beastmaster", Attribute::Strength, &[Role::Initiator], "Controls animals"),
    entry("bloodseeker", Attribute::Agility, &[Role::Carry], "Smells blood"),
    entry("bounty_hunter", Attribute::Agility, &[Role::Support], "Tracks enemies"),
    entry("brewmaster", Attribute::Strength, &[Role::Initiator], "Drunk fighter"),
    entry("bristleback", Attribute::Strength, &[Role::Carry], "Turn your back"),
    entry("broodmother", Attribute::Agility, &[Role::Carry], "Spider queen"),
    entry("centaur_warrunner", Attribute::Strength, &[Role::Initiator], "Half horse"),
    entry("chaos_knight", Attribute::Strength, &[Role::Carry], "Reality rift"),
    entry("chen", Attribute::Intelligence, &[Role::Support], "Holy persuasion"),
    entry("clinkz", Attribute::Agility, &[Role::Carry], "Burning archer"),
    entry("clockwerk", Attribute::Strength, &[Role::Initiator], "Mechanical hero"),
    entry("crystal_maiden", Attribute::Intelligence, &[Role::Support], "Freezing field"),
    entry("dark_seer", Attribute::Intelligence, &[Role::Initiator], "Vacuum ability"),
    entry("dark_willow", Attribute::Intelligence, &[Role::Support], "Fairy magic"),
    entry("dawnbreaker", Attribute::Strength, &[Role::Support], "Solar guardian"),
    entry("dazzle", Attribute::Intelligence, &[Role::Support], "Shallow grave"),
    entry("death_prophet", Attribute::Intelligence, &[Role::Carry], "Ghost swarm"),
    entry("disruptor", Attribute::Intelligence, &[Role::Support], "Storm rider"),
    entry("doom", Attribute::Strength, &[Role::Carry], "Silences with ult"),
    entry("dragon_knight", Attribute::Strength, &[Role::Carry], "Transforms into dragon"),
    entry("drow_ranger", Attribute::Agility, &[Role::Carry], "Frost arrows"),
    entry("earthshaker", Attribute::Strength, &[Role::Initiator], "Echo slam"),
    entry("earth_spirit", Attribute::Strength, &[Role::Initiator], "Rolling boulder"),
    entry("elder_titan", Attribute::Strength, &[Role::Initiator], "Astral spirit"),
    entry("ember_spirit", Attribute::Agility, &[Role::Carry], "Fire remnants"),
    entry("enchantress", Attribute::Intelligence, &[Role::Support], "Befriends creeps"),
    entry("enigma", Attribute::Intelligence, &[Role::Initiator], "Black hole"),
    entry("faceless_void", Attribute::Agility, &[Role::Carry], "Time walker"),
    entry("grimstroke", Attribute::Intelligence, &[Role::Support], "Ink magic"),
    entry("gyrocopter", Attribute::Agility, &[Role::Carry], "Flying machine"),
    entry("hoodwink", Attribute::Agility, &[Role::Support], "Squirrel archer"),
    entry("huskar", Attribute::Strength, &[Role::Carry], "Burning spears"),
    entry("invoker", Attribute::Intelligence, &[Role::Carry], "10 spells"),
    entry("io", Attribute::Strength, &[Role::Support], "Wisp"),
    entry("jakiro", Attribute::Intelligence, &[Role::Support], "Two-headed dragon"),
    entry("juggernaut", Attribute::Agility, &[Role::Carry], "Blade fury"),
    entry("keeper_of_the_light", Attribute::Intelligence, &[Role::Support], "Light bringer"),
    entry("kez", Attribute::Agility, &[Role::Carry], "Dual weapon master"),
    entry("kunkka", Attribute::Strength, &[Role::Carry], "Admiral"),
    entry("legion_commander", Attribute::Strength, &[Role::Carry], "Duel master"),
    entry("leshrac", Attribute::Intelligence, &[Role::Carry], "Lightning storm"),
    entry("lich", Attribute::Intelligence, &[Role::Support], "Chain frost"),
    entry("lifestealer", Attribute::Strength, &[Role::Carry], "Infests units"),
    entry("lina", Attribute::Intelligence, &[Role::Carry], "Fire queen"),
    entry("lion", Attribute::Intelligence, &[Role::Support], "Finger of death"),
    entry("lone_druid", Attribute::Agility, &[Role::Carry], "Has a bear"),
    entry("luna", Attribute::Agility, &[Role::Carry], "Moon rider"),
    entry("lycan", Attribute::Strength, &[Role::Carry], "Werewolf"),
    entry("magnus", Attribute::Strength, &[Role::Initiator], "Rhino warrior"),
    entry("marci", Attribute::Strength, &[Role::Carry], "Silent fighter"),
    entry("mars", Attribute::Strength, &[Role::Initiator], "God of war"),
    entry("medusa", Attribute::Agility, &[Role::Carry], "Stone gaze"),
    entry("meepo", Attribute::Agility, &[Role::Carry], "Multiple clones"),
    entry("mirana", Attribute::Agility, &[Role::Carry], "Rides a tiger"),
    entry("monkey_king", Attribute::Agility, &[Role::Carry], "Staff wielder"),
    entry("morphling", Attribute::Agility, &[Role::Carry], "Water elemental"),
    entry("muerta", Attribute::Agility, &[Role::Carry], "Gunslinger"),
    entry("naga_siren", Attribute::Agility, &[Role::Carry], "Song puts to sleep"),
    entry("nature's_prophet", Attribute::Intelligence, &[Role::Carry], "Teleports anywhere"),
    entry("necrophos", Attribute::Intelligence, &[Role::Carry], "Death pulse"),
    entry("night_stalker", Attribute::Strength, &[Role::Initiator], "Stronger at night"),
    entry("nyx_assassin", Attribute::Agility, &[Role::Initiator], "Spiked carapace"),
    entry("ogre_magi", Attribute::Intelligence, &[Role::Support], "Two-headed caster"),
    entry("omniknight", Attribute::Strength, &[Role::Support], "Holy protector"),
    entry("oracle", Attribute::Intelligence, &[Role::Support], "False promise"),
    entry("outworld_destroyer", Attribute::Intelligence, &[Role::Carry], "Astral imprisonment"),
    entry("pangolier", Attribute::Agility, &[Role::Initiator], "Rolls into ball"),
    entry("phantom_assassin", Attribute::Agility, &[Role::Carry], "Critical strikes"),
    entry("phantom_lancer", Attribute::Agility, &[Role::Carry], "Many illusions"),
    entry("phoenix", Attribute::Strength, &[Role::Initiator], "Sun ray"),
    entry("primal_beast", Attribute::Strength, &[Role::Initiator], "Charges enemies"),
    entry("puck", Attribute::Intelligence, &[Role::Initiator], "Phase shift"),
    entry("pudge", Attribute::Strength, &[Role::Initiator], "Meat hook"),
    entry("pugna", Attribute::Intelligence, &[Role::Carry], "Life drain"),
    entry("queen_of_pain", Attribute::Intelligence, &[Role::Carry], "Sonic scream"),
    entry("razor", Attribute::Agility, &[Role::Carry], "Static link"),
    entry("riki", Attribute::Agility, &[Role::Carry], "Permanent invisibility"),
    entry("ringmaster", Attribute::Intelligence, &[Role::Support], "Circus performer"),
    entry("rubick", Attribute::Intelligence, &[Role::Support], "Spell steal"),
    entry("sand_king", Attribute::Strength, &[Role::Initiator], "Epicenter"),
    entry("shadow_demon", Attribute::Intelligence, &[Role::Support], "Creates illusions"),
    entry("shadow_fiend", Attribute::Agility, &[Role::Carry], "Soul collector"),
    entry("shadow_shaman", Attribute::Intelligence, &[Role::Support], "Hex and shackles"),
    entry("silencer", Attribute::Intelligence, &[Role::Carry], "Global silence"),
    entry("skywrath_mage", Attribute::Intelligence, &[Role::Support], "Mystic flare"),
    entry("slardar", Attribute::Strength, &[Role::Initiator], "Amplify damage"),
    entry("slark", Attribute::Agility, &[Role::Carry], "Shadow dance"),
    entry("snapfire", Attribute::Strength, &[Role::Support], "Rides a lizard"),
    entry("sniper", Attribute::Agility, &[Role::Carry], "Long range"),
    entry("spectre", Attribute::Agility, &[Role::Carry], "Haunts all enemies"),
    entry("spirit_breaker", Attribute::Strength, &[Role::Initiator], "Charge of darkness"),
    entry("storm_spirit", Attribute::Intelligence, &[Role::Carry], "Ball lightning"),
    entry("sven", Attribute::Strength, &[Role::Carry], "God strength"),
    entry("techies", Attribute::Intelligence, &[Role::Support], "Mines"),
    entry("templar_assassin", Attribute::Agility, &[Role::Carry], "Refraction"),
    entry("terrorblade", Attribute::Agility, &[Role::Carry], "Demon marauder"),
    entry("tidehunter", Attribute::Strength, &[Role::Initiator], "Ravage"),
    entry("timbersaw", Attribute::Strength, &[Role::Carry], "Timber chain"),
    entry("tinker", Attribute::Intelligence, &[Role::Carry], "Rearms items"),
    entry("tiny", Attribute::Strength, &[Role::Carry], "Grows bigger"),
    entry("treant_protector", Attribute::Strength, &[Role::Support], "Tree guardian"),
    entry("troll_warlord", Attribute::Agility, &[Role::Carry], "Switches axes/melee"),
    entry("tusk", Attribute::Strength, &[Role::Initiator], "Ice shards"),
    entry("underlord", Attribute::Strength, &[Role::Support], "Dark rift"),
    entry("undying", Attribute::Strength, &[Role::Support], "Tombstone"),
    entry("ursa", Attribute::Agility, &[Role::Carry], "Bear warrior"),
    entry("vengeful_spirit", Attribute::Agility, &[Role::Support], "Swaps positions"),
    entry("venomancer", Attribute::Agility, &[Role::Support], "Poison wards"),
    entry("viper", Attribute::Agility, &[Role::Carry], "Poison attack"),
    entry("visage", Attribute::Intelligence, &[Role::Support], "Stone familiars"),
    entry("void_spirit", Attribute::Intelligence, &[Role::Carry], "Void walker"),
    entry("warlock", Attribute::Intelligence, &[Role::Support], "Summons golem"),
    entry("weaver", Attribute::Agility, &[Role::Carry], "Time lapse"),
    entry("windranger", Attribute::Intelligence, &[Role::Carry], "Shackleshot"),
    entry("winter_wyvern", Attribute::Intelligence, &[Role::Support], "Ice dragon"),
    entry("witch_doctor", Attribute::Intelligence, &[Role::Support], "Death ward"),
    entry("wraith_king", Attribute::Strength, &[Role::Carry], "Reincarnation"),
    entry("zeus", Attribute::Intelligence, &[Role::Carry], "Thunder god"),];

// ---------------------------------------------------------------------------
// Lookup helpers
// ---------------------------------------------------------------------------

/// Look up an entry by id.
pub fn get(id: &str) -> Option<&'static HeroEntry> {
    HEROES.iter().find(|h| h.id == id)
}

/// All hero ids, in catalog order.
pub fn ids() -> impl Iterator<Item = &'static str> {
    HEROES.iter().map(|h| h.id)
}

/// Number of entries in the catalog.
pub fn len() -> usize {
    HEROES.len()
}

/// Ids of every hero with the given primary attribute.
pub fn by_attribute(attribute: Attribute) -> Vec<&'static str> {
    HEROES.iter().filter(|h| h.attribute == attribute).map(|h| h.id).collect()
}

/// Ids of every hero carrying the given role tag.
pub fn by_role(role: Role) -> Vec<&'static str> {
    HEROES.iter().filter(|h| h.roles.contains(&role)).map(|h| h.id).collect()
}

/// Human-readable name for a hero id: underscores become spaces, hyphens are
/// kept, and every letter at a word boundary is upper-cased
/// ("crystal_maiden" -> "Crystal Maiden", "anti-mage" -> "Anti-Mage").
pub fn display_name(id: &str) -> String {
    let mut out = String::with_capacity(id.len());
    let mut at_boundary = true;
    for c in id.chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_alphanumeric() {
            if at_boundary {
                out.extend(c.to_uppercase());
            } else {
                out.push(c);
            }
            at_boundary = false;
        } else {
            out.push(c);
            at_boundary = true;
        }
    }
    out
}

/// Full hint line shown to the player: attribute, roles, and flavour hint.
pub fn full_hint(id: &str) -> String {
    match get(id) {
        Some(h) => {
            let roles: Vec<String> = h.roles.iter().map(|r| r.to_string()).collect();
            format!("Attribute: {} | Role: {} | Hint: {}", h.attribute, roles.join("/"), h.hint)
        }
        None => "No hint available".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_ids_unique() {
        let mut seen = HashSet::new();
        for id in ids() {
            assert!(seen.insert(id), "duplicate catalog id: {id}");
        }
    }

    #[test]
    fn every_entry_has_hint_and_roles() {
        for h in HEROES {
            assert!(!h.hint.is_empty(), "{} has empty hint", h.id);
            assert!(!h.roles.is_empty(), "{} has no roles", h.id);
        }
    }

    #[test]
    fn lookup_by_id() {
        let axe = get("axe").unwrap();
        assert_eq!(axe.attribute, Attribute::Strength);
        assert!(get("not_a_hero").is_none());
    }

    #[test]
    fn attribute_and_role_filters_partition_sensibly() {
        let str_ids = by_attribute(Attribute::Strength);
        assert!(str_ids.contains(&"axe"));
        assert!(!str_ids.contains(&"anti-mage"));

        let supports = by_role(Role::Support);
        assert!(supports.contains(&"crystal_maiden"));
        // abaddon is tagged both Support and Carry
        assert!(supports.contains(&"abaddon"));
        assert!(by_role(Role::Carry).contains(&"abaddon"));
    }

    #[test]
    fn display_name_formats_separators() {
        assert_eq!(display_name("anti-mage"), "Anti-Mage");
        assert_eq!(display_name("crystal_maiden"), "Crystal Maiden");
        assert_eq!(display_name("axe"), "Axe");
        assert_eq!(display_name("keeper_of_the_light"), "Keeper Of The Light");
    }

    #[test]
    fn full_hint_combines_metadata() {
        let hint = full_hint("axe");
        assert_eq!(hint, "Attribute: Strength | Role: Initiator | Hint: Spins to win");
        assert_eq!(full_hint("nobody"), "No hint available");
    }
}
