//! DTOs for decoding graph API responses.
//!
//! The adapter decodes into these transport DTOs first, then maps into domain
//! entities in one pass. Decoding is deliberately lenient: the API omits
//! fields freely depending on token permissions, and unknown fields are
//! ignored.

use serde::Deserialize;

use crate::domain::feed::{ImageVariant, Photo, Post};
use crate::domain::profile::{AgeRange, Profile};

/// Error envelope carried inside failure bodies (and sometimes inside
/// `200 OK` bodies).
#[derive(Debug, Clone, Deserialize)]
pub(super) struct ErrorObjectDto {
    pub(super) code: Option<i64>,
    #[serde(default)]
    pub(super) message: String,
}

/// Envelope wrapping list endpoints: `{ "data": [...] }`.
#[derive(Debug, Deserialize)]
pub(super) struct PagedDto<T> {
    #[serde(default = "Vec::new")]
    pub(super) data: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ProfileDto {
    pub(super) id: Option<String>,
    pub(super) name: Option<String>,
    pub(super) email: Option<String>,
    pub(super) location: Option<NamedPlaceDto>,
    pub(super) hometown: Option<NamedPlaceDto>,
    pub(super) age_range: Option<AgeRangeDto>,
    pub(super) birthday: Option<String>,
    pub(super) gender: Option<String>,
    pub(super) picture: Option<PictureDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct NamedPlaceDto {
    pub(super) name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct AgeRangeDto {
    pub(super) min: Option<u32>,
    pub(super) max: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PictureDto {
    pub(super) data: Option<PictureDataDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PictureDataDto {
    pub(super) url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PostDto {
    #[serde(default)]
    pub(super) id: String,
    pub(super) message: Option<String>,
    pub(super) story: Option<String>,
    #[serde(default)]
    pub(super) created_time: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct PhotoDto {
    #[serde(default)]
    pub(super) id: String,
    #[serde(default)]
    pub(super) created_time: String,
    #[serde(default)]
    pub(super) images: Vec<ImageVariantDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ImageVariantDto {
    #[serde(default)]
    pub(super) source: String,
}

impl ProfileDto {
    pub(super) fn into_profile(self) -> Profile {
        Profile {
            id: self.id,
            name: self.name,
            email: self.email,
            location: self.location.and_then(NamedPlaceDto::into_name),
            hometown: self.hometown.and_then(NamedPlaceDto::into_name),
            age_range: self.age_range.map(AgeRangeDto::into_age_range),
            birthday: self.birthday,
            gender: self.gender,
            picture_url: self
                .picture
                .and_then(|picture| picture.data)
                .and_then(|data| data.url)
                .filter(|url| !url.is_empty()),
        }
    }
}

impl NamedPlaceDto {
    // Places without a name render nothing, so drop them at the boundary.
    fn into_name(self) -> Option<String> {
        self.name.filter(|name| !name.is_empty())
    }
}

impl AgeRangeDto {
    fn into_age_range(self) -> AgeRange {
        AgeRange {
            min: self.min,
            max: self.max,
        }
    }
}

impl PostDto {
    pub(super) fn into_post(self) -> Post {
        Post {
            id: self.id,
            message: self.message,
            story: self.story,
            created_time: self.created_time,
        }
    }
}

impl PhotoDto {
    pub(super) fn into_photo(self) -> Photo {
        Photo {
            id: self.id,
            created_time: self.created_time,
            images: self
                .images
                .into_iter()
                .map(|variant| ImageVariant {
                    source: variant.source,
                })
                .collect(),
        }
    }
}
