use super::error::Result;
use super::{inject_activeness, inject_address, inject_ad_id, inject_title};
use crate::dom::Document;
use crate::models::{Ad, Extraction, Offer, Request};
use crate::sources::Page;
use chrono::Utc;
use tracing::{debug, warn};

/// One step of the injection chain, filling a single field of `A`
pub trait Inject<A: Ad> {
    /// Name of the field this step writes
    fn field(&self) -> &'static str;

    fn inject(&self, ad: &mut A, doc: &Document) -> Result<()>;
}

pub struct ActivenessInjector;
pub struct AdIdInjector;
pub struct TitleInjector;
pub struct AddressInjector;

impl<A: Ad> Inject<A> for ActivenessInjector {
    fn field(&self) -> &'static str {
        "active"
    }

    fn inject(&self, ad: &mut A, doc: &Document) -> Result<()> {
        inject_activeness(ad, doc);
        Ok(())
    }
}

impl<A: Ad> Inject<A> for AdIdInjector {
    fn field(&self) -> &'static str {
        "ad_id"
    }

    fn inject(&self, ad: &mut A, doc: &Document) -> Result<()> {
        inject_ad_id(ad, doc)
    }
}

impl<A: Ad> Inject<A> for TitleInjector {
    fn field(&self) -> &'static str {
        "title"
    }

    fn inject(&self, ad: &mut A, doc: &Document) -> Result<()> {
        inject_title(ad, doc)
    }
}

impl Inject<Offer> for AddressInjector {
    fn field(&self) -> &'static str {
        "address"
    }

    fn inject(&self, offer: &mut Offer, doc: &Document) -> Result<()> {
        inject_address(offer, doc)
    }
}

/// Ordered chain of injectors run over a single page
pub struct Pipeline<A: Ad> {
    steps: Vec<Box<dyn Inject<A>>>,
}

impl<A: Ad> Pipeline<A> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn with(mut self, step: impl Inject<A> + 'static) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    pub fn fields(&self) -> Vec<&'static str> {
        self.steps.iter().map(|step| step.field()).collect()
    }

    /// Runs every step in order, stopping at the first failure.
    ///
    /// Fields written before the failing step stay on `ad`.
    pub fn run(&self, ad: &mut A, doc: &Document) -> Result<()> {
        for step in &self.steps {
            debug!("Injecting {}", step.field());
            if let Err(e) = step.inject(ad, doc) {
                warn!("Failed to inject {}: {}", step.field(), e);
                return Err(e);
            }
        }
        Ok(())
    }
}

impl<A: Ad + Default> Pipeline<A> {
    /// Parses `page` and runs the chain over a fresh record.
    ///
    /// A failure is reported in `error` next to the partially filled record.
    pub fn extract(&self, page: &Page) -> Extraction<A> {
        let doc = Document::parse(&page.html);
        let mut ad = A::default();
        let error = self.run(&mut ad, &doc).err().map(|e| e.to_string());

        Extraction {
            origin: page.origin.clone(),
            loaded_at: page.loaded_at,
            extracted_at: Utc::now(),
            ad,
            error,
        }
    }
}

impl<A: Ad> Default for Pipeline<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeline<Offer> {
    pub fn offer() -> Self {
        Self::new()
            .with(ActivenessInjector)
            .with(AdIdInjector)
            .with(TitleInjector)
            .with(AddressInjector)
    }
}

impl Pipeline<Request> {
    pub fn request() -> Self {
        Self::new()
            .with(ActivenessInjector)
            .with(AdIdInjector)
            .with(TitleInjector)
    }
}
