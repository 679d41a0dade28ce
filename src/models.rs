use serde::{Deserialize, Serialize};

/// A person's name as returned by the random-user API
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserName {
    pub first: String,
    pub last: String,
}

/// Location subset we display
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
}

/// A user record. Extra API fields are ignored on decode.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: UserName,
    pub location: Location,
    pub gender: String,
}

impl User {
    pub fn new(
        first: impl Into<String>,
        last: impl Into<String>,
        city: impl Into<String>,
        gender: impl Into<String>,
    ) -> Self {
        User {
            name: UserName {
                first: first.into(),
                last: last.into(),
            },
            location: Location { city: city.into() },
            gender: gender.into(),
        }
    }

    /// "First Last", as shown in the Name column
    pub fn display_name(&self) -> String {
        format!("{} {}", self.name.first, self.name.last)
    }

    pub fn field(&self, field: EditField) -> &str {
        match field {
            EditField::FirstName => &self.name.first,
            EditField::LastName => &self.name.last,
            EditField::City => &self.location.city,
            EditField::Gender => &self.gender,
        }
    }

    pub fn field_mut(&mut self, field: EditField) -> &mut String {
        match field {
            EditField::FirstName => &mut self.name.first,
            EditField::LastName => &mut self.name.last,
            EditField::City => &mut self.location.city,
            EditField::Gender => &mut self.gender,
        }
    }
}

/// Response envelope of the random-user API
#[derive(Clone, Debug, Deserialize)]
pub struct RandomUserPage {
    pub results: Vec<User>,
}

/// Identity assigned to a record when it enters the directory
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub u64);

/// A record held by the directory
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub id: UserId,
    pub user: User,
}

/// Text fields of the edit dialog, in tab order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EditField {
    #[default]
    FirstName,
    LastName,
    City,
    Gender,
}

impl EditField {
    pub const ALL: [EditField; 4] = [
        EditField::FirstName,
        EditField::LastName,
        EditField::City,
        EditField::Gender,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EditField::FirstName => "First Name",
            EditField::LastName => "Last Name",
            EditField::City => "City",
            EditField::Gender => "Gender",
        }
    }

    pub fn next(&self) -> EditField {
        match self {
            EditField::FirstName => EditField::LastName,
            EditField::LastName => EditField::City,
            EditField::City => EditField::Gender,
            EditField::Gender => EditField::FirstName,
        }
    }

    pub fn prev(&self) -> EditField {
        match self {
            EditField::FirstName => EditField::Gender,
            EditField::LastName => EditField::FirstName,
            EditField::City => EditField::LastName,
            EditField::Gender => EditField::City,
        }
    }
}

/// A dismissible message shown above the table
#[derive(Clone, Debug)]
pub struct Notification {
    pub message: String,
    pub raised_at: chrono::DateTime<chrono::Local>,
}

impl Notification {
    pub fn new(message: impl Into<String>) -> Self {
        Notification {
            message: message.into(),
            raised_at: chrono::Local::now(),
        }
    }
}
