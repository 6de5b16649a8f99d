use crate::error::{CodecError, Direction, Result};
use crate::tags::{downlink_tag_name, uplink_tag_name};

/// Left-to-right scanner over a borrowed payload.
///
/// The position only moves forward and lives as long as one decode call.
pub(crate) struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
    direction: Direction,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(bytes: &'a [u8], direction: Direction) -> Self {
        Self {
            bytes,
            pos: 0,
            direction,
        }
    }

    /// Read the next tag byte, or `None` at the end of the payload.
    pub(crate) fn next_tag(&mut self) -> Option<u8> {
        let tag = *self.bytes.get(self.pos)?;
        self.pos += 1;
        Some(tag)
    }

    /// Read the `N` value bytes following `tag`.
    pub(crate) fn take<const N: usize>(&mut self, tag: u8) -> Result<[u8; N]> {
        let value = self
            .bytes
            .get(self.pos..self.pos + N)
            .and_then(|slice| <[u8; N]>::try_from(slice).ok())
            .ok_or(CodecError::IndexOutOfBounds {
                direction: self.direction,
                field: self.field_name(tag),
            })?;
        self.pos += N;
        Ok(value)
    }

    /// Record field name of `tag` in this cursor's direction.
    pub(crate) fn field_name(&self, tag: u8) -> &'static str {
        let name = match self.direction {
            Direction::Uplink => uplink_tag_name(tag),
            Direction::Downlink => downlink_tag_name(tag),
        };
        name.unwrap_or("value")
    }

    pub(crate) fn unknown_tag(&self, tag: u8) -> CodecError {
        CodecError::UnknownTag {
            direction: self.direction,
            tag,
        }
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_tags_and_values_in_order() {
        let mut cursor = Cursor::new(&[0x00, 0x0c, 0x44, 0x02], Direction::Uplink);
        assert_eq!(cursor.next_tag(), Some(0x00));
        assert_eq!(cursor.take::<2>(0x00).unwrap(), [0x0c, 0x44]);
        assert_eq!(cursor.next_tag(), Some(0x02));
        assert_eq!(cursor.position(), 4);
        assert_eq!(cursor.next_tag(), None);
    }

    #[test]
    fn short_value_names_the_field() {
        let mut cursor = Cursor::new(&[0x01, 0x0c], Direction::Downlink);
        cursor.next_tag();
        let err = cursor.take::<2>(0x01).unwrap_err();
        assert_eq!(
            err,
            CodecError::IndexOutOfBounds {
                direction: Direction::Downlink,
                field: "alarm",
            }
        );
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn field_names_follow_direction() {
        let uplink = Cursor::new(&[], Direction::Uplink);
        assert_eq!(uplink.field_name(0x01), "humidity");
        assert_eq!(uplink.field_name(0x03), "volumes");

        let downlink = Cursor::new(&[], Direction::Downlink);
        assert_eq!(downlink.field_name(0x00), "pulseCounterThreshold");
        assert_eq!(downlink.field_name(0x7f), "value");
    }
}
