use rawda::Shell;
use rawda_i18n::{Language, LocaleService};
use rawda_models::{Directory, Role, User, UserId};

/// Well-known demo credentials (must match `Directory::demo`)
#[allow(dead_code)]
pub mod demo {
    pub const ADMIN: (&str, &str) = ("admin1", "pass123");
    pub const TEACHER: (&str, &str) = ("teacher1", "pass123");
    pub const PARENT: (&str, &str) = ("parent1", "pass123");
}

/// Create a directory record with the given role
#[allow(dead_code)]
pub fn create_test_user(username: &str, password: &str, role: Role) -> User {
    User {
        id: UserId::new(),
        username: username.to_string(),
        password: password.to_string(),
        name: format!("Test {}", username),
        role,
        avatar: None,
    }
}

/// A shell over the demo directory, starting in `language`
#[allow(dead_code)]
pub fn demo_shell(language: Language) -> Shell {
    Shell::new(Directory::demo(), LocaleService::new(language))
}

/// A shell signed in with the given demo credentials
#[allow(dead_code)]
pub fn signed_in_shell(credentials: (&str, &str)) -> Shell {
    let mut shell = demo_shell(Language::En);
    shell
        .submit_login(credentials.0, credentials.1)
        .expect("demo credentials should authenticate");
    shell
}
