use crate::driver::{Objects, Pixy};
use crate::error::Error;
use core::cell::RefCell;
use critical_section::Mutex;
use embedded_hal::spi::SpiDevice;

/// A driver singleton guarded by a `critical_section` mutex.
pub type GlobalPixy<SPI> = Mutex<RefCell<Option<Pixy<SPI>>>>;

/// Used to initialize a global static [`Pixy`] for use with `critical_section`.
///
/// # Returns
/// * An empty mutex-guarded slot
///
/// # Example
/// ```rust,ignore
/// use pixy_spi::poll::{global_pixy_init, GlobalPixy};
/// use some_hal::Spi0Device;
///
/// static PIXY: GlobalPixy<Spi0Device> = global_pixy_init();
/// ```
pub const fn global_pixy_init<SPI: SpiDevice>() -> GlobalPixy<SPI> {
    Mutex::new(RefCell::new(None))
}

/// Builds a driver around `spi` and stores it in `global`, replacing any
/// driver already there.
pub fn global_pixy_setup<SPI: SpiDevice>(global: &GlobalPixy<SPI>, spi: SPI) {
    critical_section::with(|cs| {
        let _ = global.borrow(cs).replace(Some(Pixy::new(spi)));
    });
}

/// Runs `f` on the global driver inside a critical section.
///
/// Use this for every access from outside the polling context, e.g. to queue
/// commands, so the command queue is never touched mid-exchange.
///
/// # Returns
/// `None` if [`global_pixy_setup`] has not been called yet.
pub fn with_global_pixy<SPI, R, F>(global: &GlobalPixy<SPI>, f: F) -> Option<R>
where
    SPI: SpiDevice,
    F: FnOnce(&mut Pixy<SPI>) -> R,
{
    critical_section::with(|cs| global.borrow(cs).borrow_mut().as_mut().map(f))
}

/// Polls the global driver once.
///
/// Meant to be called from a timer interrupt firing every
/// [`FRAME_PERIOD_US`](crate::poll::FRAME_PERIOD_US).
///
/// # Example
/// ```rust,ignore
/// #[interrupt]
/// fn TIM2() {
///     if let Some(Ok(objects)) = global_pixy_poll(&PIXY) {
///         // ...
///     }
/// }
/// ```
pub fn global_pixy_poll<SPI: SpiDevice>(
    global: &GlobalPixy<SPI>,
) -> Option<Result<Objects, Error<SPI::Error>>> {
    with_global_pixy(global, |pixy| pixy.get_detected_objects())
}

/// Takes the driver back out of `global`, leaving it empty.
pub fn global_pixy_take<SPI: SpiDevice>(global: &GlobalPixy<SPI>) -> Option<Pixy<SPI>> {
    critical_section::with(|cs| global.borrow(cs).take())
}
