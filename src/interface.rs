//! The byte transport between a driver and its display controller.
//!
//! Controllers in the SSD13xx family take a command byte followed by its arguments with the D/C
//! line held low, and pixel data with D/C held high.

pub trait DisplayInterface {
    type Error;

    /// Send a command byte and its arguments, all in command mode.
    fn send_commands(&mut self, cmds: &[u8]) -> Result<(), Self::Error>;
    /// Send bytes in data mode.
    fn send_data(&mut self, buf: &[u8]) -> Result<(), Self::Error>;
    /// Read `buf.len()` bytes of data from the controller.
    fn read_data(&mut self, buf: &mut [u8]) -> Result<(), Self::Error>;
}

pub mod spi {
    //! The SPI interface supports the "4-wire" interface of the controller, such that each word on
    //! the SPI bus is 8 bits and a GPIO output drives the D/C line.

    use embedded_hal as hal;

    use super::DisplayInterface;

    /// A failure on either half of the 4-wire bus.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum SpiInterfaceError<SE, PE> {
        Spi(SE),
        Pin(PE),
    }

    pub struct SpiInterface<SPI, DC> {
        /// The SPI master device connected to the controller.
        spi: SPI,
        /// A GPIO output pin connected to the D/C (data/command) pin of the controller (the fourth
        /// "wire" of "4-wire" mode).
        dc: DC,
    }

    impl<SPI, DC> SpiInterface<SPI, DC> {
        /// Create a new SPI interface to communicate with the display controller. `spi` is the SPI
        /// master device, and `dc` is the GPIO output pin connected to the D/C pin.
        pub fn new(spi: SPI, dc: DC) -> Self {
            Self { spi, dc }
        }

        /// Give back the bus and pin.
        pub fn release(self) -> (SPI, DC) {
            (self.spi, self.dc)
        }
    }

    impl<SPI, DC, SE, PE> DisplayInterface for SpiInterface<SPI, DC>
    where
        SPI: hal::blocking::spi::Write<u8, Error = SE> + hal::blocking::spi::Transfer<u8, Error = SE>,
        DC: hal::digital::v2::OutputPin<Error = PE>,
    {
        type Error = SpiInterfaceError<SE, PE>;

        fn send_commands(&mut self, cmds: &[u8]) -> Result<(), Self::Error> {
            self.dc.set_low().map_err(SpiInterfaceError::Pin)?;
            self.spi.write(cmds).map_err(SpiInterfaceError::Spi)
        }

        fn send_data(&mut self, buf: &[u8]) -> Result<(), Self::Error> {
            self.dc.set_high().map_err(SpiInterfaceError::Pin)?;
            self.spi.write(buf).map_err(SpiInterfaceError::Spi)
        }

        fn read_data(&mut self, buf: &mut [u8]) -> Result<(), Self::Error> {
            self.dc.set_high().map_err(SpiInterfaceError::Pin)?;
            for b in buf.iter_mut() {
                *b = 0;
            }
            self.spi.transfer(buf).map_err(SpiInterfaceError::Spi)?;
            Ok(())
        }
    }
}
