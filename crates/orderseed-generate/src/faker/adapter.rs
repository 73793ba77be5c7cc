use fake::Fake;
use rand::{Rng, RngCore};

use crate::faker::locales::LocaleKey;

const EMAIL_SUFFIX_MIN: u32 = 1;
const EMAIL_SUFFIX_MAX: u32 = 9999;

/// Person and address values backed by the `fake` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FakeRsAdapter {
    locale: LocaleKey,
}

impl FakeRsAdapter {
    pub fn new(locale: LocaleKey) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> LocaleKey {
        self.locale
    }

    pub fn first_name(&self, rng: &mut dyn RngCore) -> String {
        match self.locale {
            LocaleKey::EnUs => fake::faker::name::en::FirstName().fake_with_rng(rng),
            LocaleKey::PtBr => fake::faker::name::pt_br::FirstName().fake_with_rng(rng),
        }
    }

    pub fn last_name(&self, rng: &mut dyn RngCore) -> String {
        match self.locale {
            LocaleKey::EnUs => fake::faker::name::en::LastName().fake_with_rng(rng),
            LocaleKey::PtBr => fake::faker::name::pt_br::LastName().fake_with_rng(rng),
        }
    }

    /// Address shaped like `name.surname1234@provider` for the given person.
    ///
    /// The numeric suffix keeps the space of candidates large enough that
    /// thousands of rows sharing common names still find free addresses.
    pub fn email(&self, name: &str, surname: &str, rng: &mut dyn RngCore) -> String {
        let provider: String = match self.locale {
            LocaleKey::EnUs => fake::faker::internet::en::FreeEmailProvider().fake_with_rng(rng),
            LocaleKey::PtBr => {
                fake::faker::internet::pt_br::FreeEmailProvider().fake_with_rng(rng)
            }
        };
        let suffix = rng.random_range(EMAIL_SUFFIX_MIN..=EMAIL_SUFFIX_MAX);
        format!(
            "{}.{}{suffix}@{provider}",
            mailbox_part(name, "user"),
            mailbox_part(surname, "mail")
        )
    }

    /// Single-line postal address.
    pub fn address(&self, rng: &mut dyn RngCore) -> String {
        use fake::faker::address;

        match self.locale {
            LocaleKey::EnUs => {
                let building: String = address::en::BuildingNumber().fake_with_rng(rng);
                let street: String = address::en::StreetName().fake_with_rng(rng);
                let city: String = address::en::CityName().fake_with_rng(rng);
                let state: String = address::en::StateAbbr().fake_with_rng(rng);
                let zip: String = address::en::ZipCode().fake_with_rng(rng);
                format!("{building} {street}, {city}, {state} {zip}")
            }
            LocaleKey::PtBr => {
                let building: String = address::pt_br::BuildingNumber().fake_with_rng(rng);
                let street: String = address::pt_br::StreetName().fake_with_rng(rng);
                let city: String = address::pt_br::CityName().fake_with_rng(rng);
                let state: String = address::pt_br::StateAbbr().fake_with_rng(rng);
                let zip: String = address::pt_br::ZipCode().fake_with_rng(rng);
                format!("{street}, {building}, {city} - {state}, {zip}")
            }
        }
    }
}

/// Lowercase ASCII letters and digits of `value`, or `fallback` when none remain.
fn mailbox_part(value: &str, fallback: &str) -> String {
    let part: String = value
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if part.is_empty() {
        fallback.to_string()
    } else {
        part
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn values_are_single_line_and_non_empty() {
        for locale in [LocaleKey::EnUs, LocaleKey::PtBr] {
            let faker = FakeRsAdapter::new(locale);
            let mut rng = ChaCha8Rng::seed_from_u64(17);
            for _ in 0..20 {
                let address = faker.address(&mut rng);
                assert!(!address.is_empty());
                assert!(!address.contains('\n'));
                assert!(!faker.first_name(&mut rng).is_empty());
                assert!(!faker.last_name(&mut rng).is_empty());
                let email = faker.email("Ann", "Lee", &mut rng);
                assert!(email.starts_with("ann.lee"));
                assert!(email.contains('@'));
            }
        }
    }

    #[test]
    fn same_seed_gives_same_values() {
        let faker = FakeRsAdapter::default();
        let mut rng_a = ChaCha8Rng::seed_from_u64(99);
        let mut rng_b = ChaCha8Rng::seed_from_u64(99);
        assert_eq!(
            faker.email("Ann", "Lee", &mut rng_a),
            faker.email("Ann", "Lee", &mut rng_b)
        );
        assert_eq!(faker.address(&mut rng_a), faker.address(&mut rng_b));
    }

    #[test]
    fn mailbox_drops_accents_and_spaces() {
        assert_eq!(mailbox_part("João Pedro", "user"), "joopedro");
        assert_eq!(mailbox_part("D'Ávila", "mail"), "dvila");
        assert_eq!(mailbox_part("Ñ", "user"), "user");
    }
}
