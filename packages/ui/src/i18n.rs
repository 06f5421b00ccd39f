//! Static translation tables for the two supported languages.

use dioxus::prelude::*;
use store::Language;

/// The active display language, provided as context by the app root.
pub type LocaleSignal = Signal<Language>;

pub fn use_locale() -> LocaleSignal {
    use_context::<LocaleSignal>()
}

const EN: &[(&str, &str)] = &[
    ("profile.title", "My profile"),
    ("profile.name", "Name"),
    ("profile.email", "Email"),
    ("profile.phone", "Phone"),
    ("profile.name_placeholder", "Firstname LASTNAME"),
    ("profile.email_placeholder", "your-mail@address.com"),
    ("profile.phone_placeholder", "0612345678"),
    ("profile.avatar", "Profile picture"),
    ("profile.change_avatar", "Change picture"),
    ("profile.edit", "Edit"),
    ("profile.save", "Save"),
    ("profile.cancel", "Cancel"),
    ("profile.history", "History"),
    ("profile.settings", "Settings"),
    ("errors.name_required", "Name is required"),
    ("errors.email_required", "Email is required"),
    ("errors.email_invalid", "Enter a valid email address"),
    ("errors.phone_required", "Phone number is required"),
    ("errors.phone_invalid", "Phone number may only contain digits"),
    ("alerts.ok", "OK"),
    ("alerts.error_title", "Error"),
    ("alerts.fix_fields", "Please fix the required fields."),
    ("alerts.success_title", "Success"),
    ("alerts.saved", "Your profile has been saved."),
    ("alerts.save_failed", "Your profile could not be saved. Please try again."),
    ("alerts.permission_title", "Permission required"),
    (
        "alerts.permission_denied",
        "Access to your photo library is needed to change your picture.",
    ),
    ("history.title", "History"),
    ("history.empty", "Nothing recorded yet."),
    ("history.clear", "Clear"),
    ("settings.title", "Settings"),
    ("settings.language", "Language"),
    ("settings.save", "Save"),
    ("settings.saved", "Saved"),
    ("settings.save_failed", "Could not save settings"),
    ("nav.back", "Back"),
    ("lang.en", "English"),
    ("lang.fr", "Français"),
];

const FR: &[(&str, &str)] = &[
    ("profile.title", "Mon profil"),
    ("profile.name", "Nom"),
    ("profile.email", "E-mail"),
    ("profile.phone", "Téléphone"),
    ("profile.name_placeholder", "Prénom NOM"),
    ("profile.email_placeholder", "votre-mail@adresse.com"),
    ("profile.phone_placeholder", "0612345678"),
    ("profile.avatar", "Photo de profil"),
    ("profile.change_avatar", "Changer la photo"),
    ("profile.edit", "Modifier"),
    ("profile.save", "Enregistrer"),
    ("profile.cancel", "Annuler"),
    ("profile.history", "Historique"),
    ("profile.settings", "Paramètres"),
    ("errors.name_required", "Le nom est obligatoire"),
    ("errors.email_required", "L'e-mail est obligatoire"),
    ("errors.email_invalid", "Saisissez une adresse e-mail valide"),
    ("errors.phone_required", "Le numéro de téléphone est obligatoire"),
    ("errors.phone_invalid", "Le numéro ne peut contenir que des chiffres"),
    ("alerts.ok", "OK"),
    ("alerts.error_title", "Erreur"),
    ("alerts.fix_fields", "Veuillez corriger les champs obligatoires."),
    ("alerts.success_title", "Succès"),
    ("alerts.saved", "Votre profil a été enregistré."),
    ("alerts.save_failed", "Votre profil n'a pas pu être enregistré. Réessayez."),
    ("alerts.permission_title", "Autorisation requise"),
    (
        "alerts.permission_denied",
        "L'accès à vos photos est nécessaire pour changer votre photo.",
    ),
    ("history.title", "Historique"),
    ("history.empty", "Aucune activité pour le moment."),
    ("history.clear", "Effacer"),
    ("settings.title", "Paramètres"),
    ("settings.language", "Langue"),
    ("settings.save", "Enregistrer"),
    ("settings.saved", "Enregistré"),
    ("settings.save_failed", "Impossible d'enregistrer les paramètres"),
    ("nav.back", "Retour"),
    ("lang.en", "English"),
    ("lang.fr", "Français"),
];

fn table(language: Language) -> &'static [(&'static str, &'static str)] {
    match language {
        Language::En => EN,
        Language::Fr => FR,
    }
}

fn lookup(language: Language, key: &str) -> Option<&'static str> {
    table(language)
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
}

/// Translate `key`, falling back to English and then to the key itself.
pub fn translate(language: Language, key: &'static str) -> &'static str {
    lookup(language, key)
        .or_else(|| lookup(Language::En, key))
        .unwrap_or(key)
}
