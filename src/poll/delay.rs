use crate::driver::Pixy;
use crate::error::Error;
use crate::object::DetectedObject;
use core::convert::Infallible;
use embedded_hal::delay::DelayNs;
use embedded_hal::spi::SpiDevice;

/// Runs a blocking loop that polls the sensor once per `period_us`.
///
/// This is a simple control loop for firmware that has nothing better to do
/// between frames. Each iteration reads one frame with
/// [`get_detected_objects()`](Pixy::get_detected_objects), passes the objects to
/// `on_frame` together with the driver (so it can queue commands in response),
/// then sleeps.
///
/// # Arguments
/// - `pixy`: The driver to poll.
/// - `delay`: A delay provider implementing `DelayNs`, typically from the HAL.
/// - `period_us`: The delay between polls, in microseconds (e.g.
///   [`FRAME_PERIOD_US`](crate::poll::FRAME_PERIOD_US)).
/// - `on_frame`: Called after every poll, including polls that found nothing.
///
/// # Example
/// ```rust,ignore
/// use pixy_spi::poll::{run_poll_loop, FRAME_PERIOD_US};
/// let mut pixy = Pixy::new(spi);
/// let err = run_poll_loop(&mut pixy, &mut delay, FRAME_PERIOD_US, |pixy, objects| {
///     if let Some(target) = objects.first() {
///         pixy.set_servos(target.x(), target.y())?;
///     }
///     Ok(())
/// });
/// ```
///
/// # Returns
/// Only on error: the first SPI failure, or the first error returned by `on_frame`.
pub fn run_poll_loop<SPI, D, F>(
    pixy: &mut Pixy<SPI>,
    delay: &mut D,
    period_us: u32,
    mut on_frame: F,
) -> Result<Infallible, Error<SPI::Error>>
where
    SPI: SpiDevice,
    D: DelayNs,
    F: FnMut(&mut Pixy<SPI>, &[DetectedObject]) -> Result<(), Error<SPI::Error>>,
{
    loop {
        let objects = pixy.get_detected_objects()?;
        on_frame(pixy, &objects)?;
        delay.delay_us(period_us);
    }
}
