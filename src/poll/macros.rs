/// Declares a static global `PIXY` driver slot protected by a `critical_section` mutex.
///
/// This macro creates a `static` singleton `PIXY` suitable for firmware where a
/// timer interrupt polls the sensor and the main thread queues commands, or
/// the other way around. Fill it with
/// [`global_pixy_setup`](crate::poll::global_pixy_setup).
///
/// # Arguments
/// - `$spi`: The concrete type of the SPI device (must implement `SpiDevice`)
///
/// # Example
/// ```rust,ignore
/// init_pixy!(MySpiDevice);
///
/// fn main() {
///     pixy_spi::poll::global_pixy_setup(&PIXY, spi);
/// }
/// ```
#[macro_export]
macro_rules! init_pixy {
    ( $spi:ty ) => {
        pub static PIXY: $crate::poll::GlobalPixy<$spi> = $crate::poll::global_pixy_init::<$spi>();
    };
}

#[cfg(test)]
mod tests {
    use embedded_hal_mock::eh1::spi::Mock as SpiMock;

    init_pixy!(SpiMock<u8>);

    #[test]
    fn test_init_pixy_declares_empty_slot() {
        assert!(crate::poll::global_pixy_take(&PIXY).is_none());
    }
}
