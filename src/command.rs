//! Outbound command encoding.
//!
//! Every command starts with a `0x00` lead-in byte followed by an opcode and its
//! arguments. Multi-byte arguments are little-endian. Parameters are range
//! checked here so a bad value is rejected before anything reaches the queue.
//!
//! | Command  | Bytes                                          |
//! |----------|------------------------------------------------|
//! | servos   | `00 ff s1_lo s1_hi s2_lo s2_hi`                |
//! | exposure | `00 fe value`                                  |
//! | LED      | `00 fd red green blue`                         |

use crate::consts::{EXPOSURE_SYNC, LED_SYNC, MAX_BYTE_PARAMETER, MAX_SERVO_POSITION, SERVO_SYNC};
use crate::error::InvalidArgument;

/// Encodes a pan/tilt servo command.
///
/// Both positions must lie in `0..=1000`.
pub fn encode_servos(s1: u16, s2: u16) -> Result<[u8; 6], InvalidArgument> {
    let [s1_lo, s1_hi] = InvalidArgument::check("s1", s1, MAX_SERVO_POSITION)?.to_le_bytes();
    let [s2_lo, s2_hi] = InvalidArgument::check("s2", s2, MAX_SERVO_POSITION)?.to_le_bytes();
    Ok([0x00, SERVO_SYNC, s1_lo, s1_hi, s2_lo, s2_hi])
}

/// Encodes a camera exposure command. `exposure` must lie in `0..=255`.
pub fn encode_exposure(exposure: u16) -> Result<[u8; 3], InvalidArgument> {
    let exposure = byte_parameter("exposure", exposure)?;
    Ok([0x00, EXPOSURE_SYNC, exposure])
}

/// Encodes an RGB LED command. Each channel must lie in `0..=255`.
pub fn encode_led(red: u16, green: u16, blue: u16) -> Result<[u8; 5], InvalidArgument> {
    let red = byte_parameter("red", red)?;
    let green = byte_parameter("green", green)?;
    let blue = byte_parameter("blue", blue)?;
    Ok([0x00, LED_SYNC, red, green, blue])
}

fn byte_parameter(name: &'static str, value: u16) -> Result<u8, InvalidArgument> {
    let value = InvalidArgument::check(name, value, MAX_BYTE_PARAMETER)?;
    Ok(value.to_le_bytes()[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_servos() {
        assert_eq!(
            encode_servos(500, 500),
            Ok([0x00, 0xff, 0xf4, 0x01, 0xf4, 0x01])
        );
        assert_eq!(
            encode_servos(0, 1000),
            Ok([0x00, 0xff, 0x00, 0x00, 0xe8, 0x03])
        );
    }

    #[test]
    fn test_encode_servos_rejects_out_of_range() {
        let err = encode_servos(1001, 0).unwrap_err();
        assert_eq!(err.name, "s1");
        assert_eq!(err.value, 1001);
        assert_eq!(err.max, 1000);

        let err = encode_servos(0, u16::MAX).unwrap_err();
        assert_eq!(err.name, "s2");
    }

    #[test]
    fn test_encode_exposure() {
        assert_eq!(encode_exposure(0), Ok([0x00, 0xfe, 0x00]));
        assert_eq!(encode_exposure(255), Ok([0x00, 0xfe, 0xff]));
        assert!(encode_exposure(256).is_err());
    }

    #[test]
    fn test_encode_led_carries_all_three_channels() {
        assert_eq!(
            encode_led(255, 128, 1),
            Ok([0x00, 0xfd, 0xff, 0x80, 0x01])
        );
    }

    #[test]
    fn test_encode_led_rejects_each_channel() {
        assert_eq!(encode_led(256, 0, 0).unwrap_err().name, "red");
        assert_eq!(encode_led(0, 256, 0).unwrap_err().name, "green");
        assert_eq!(encode_led(0, 0, 256).unwrap_err().name, "blue");
    }
}
