use uuid::Uuid;

/// Trait for generating anonymous nicknames
pub trait NicknameGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Pet name-based nickname generator
#[derive(Debug, Default)]
pub struct PetNameGenerator;

impl NicknameGenerator for PetNameGenerator {
    fn generate(&self) -> String {
        petname::Petnames::default().generate_one(2, "-")
    }
}

/// Trait for generating member identities
pub trait IdentityGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Random v4 UUID identities
#[derive(Debug, Default)]
pub struct UuidIdentityGenerator;

impl IdentityGenerator for UuidIdentityGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
