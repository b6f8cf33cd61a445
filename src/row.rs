use crate::{
    predicate::{Field, FieldPresence, FieldSource, Row},
    value::Value,
};
use serde::{Deserialize, Serialize};

///
/// Field vocabulary
///
/// Every queryable field of the member/team pair. Sort and filter
/// references outside this vocabulary are rejected at the execution
/// boundary.
///

pub mod fields {
    use crate::predicate::Field;

    pub const USERNAME: Field = Field::primary("username");
    pub const AGE: Field = Field::primary("age");
    pub const TEAM_NAME: Field = Field::joined("name");

    pub const ALL: [Field; 3] = [USERNAME, AGE, TEAM_NAME];

    #[must_use]
    pub fn is_known(field: &Field) -> bool {
        ALL.contains(field)
    }
}

///
/// MemberRecord
///
/// Primary record. `team_id` is a many-to-one reference, so the left
/// join over it can never multiply member rows.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MemberRecord {
    pub id: u64,
    pub username: String,
    pub age: i64,
    pub team_id: Option<u64>,
}

impl MemberRecord {
    #[must_use]
    pub fn new(id: u64, username: impl Into<String>, age: i64, team_id: Option<u64>) -> Self {
        Self {
            id,
            username: username.into(),
            age,
            team_id,
        }
    }
}

///
/// TeamRecord
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub id: u64,
    pub name: String,
}

impl TeamRecord {
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

///
/// JoinedRow
///
/// One left-join pairing during evaluation. Joined-source fields read
/// from the team side; an absent team reports every joined field as
/// missing, so joined-field predicates exclude teamless members while
/// an empty filter still preserves them.
///

#[derive(Clone, Copy, Debug)]
pub struct JoinedRow<'a> {
    pub member: &'a MemberRecord,
    pub team: Option<&'a TeamRecord>,
}

impl Row for JoinedRow<'_> {
    fn field(&self, field: &Field) -> FieldPresence {
        match field.source {
            FieldSource::Primary => match field.name {
                "username" => FieldPresence::Present(Value::Text(self.member.username.clone())),
                "age" => FieldPresence::Present(Value::Int(self.member.age)),
                _ => FieldPresence::Missing,
            },
            FieldSource::Joined => match (self.team, field.name) {
                (Some(team), "name") => FieldPresence::Present(Value::Text(team.name.clone())),
                _ => FieldPresence::Missing,
            },
        }
    }
}

///
/// MemberTeamRow
///
/// Flat cross-record projection returned by the execution boundary.
/// Consumed as-is; the search core never mutates result rows.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MemberTeamRow {
    pub member_id: u64,
    pub username: String,
    pub age: i64,
    pub team_id: Option<u64>,
    pub team_name: Option<String>,
}

impl MemberTeamRow {
    /// Project one joined pairing into the flat output shape.
    #[must_use]
    pub fn project(member: &MemberRecord, team: Option<&TeamRecord>) -> Self {
        Self {
            member_id: member.id,
            username: member.username.clone(),
            age: member.age,
            team_id: team.map(|team| team.id),
            team_name: team.map(|team| team.name.clone()),
        }
    }
}

///
/// TESTS
///
