use std::sync::Arc;

use futures::stream::BoxStream;

use super::feed::PagedFeed;
use super::scope::ViewModelScope;
use super::{dispatch, paging_error};
use crate::flow::StateFlow;
use crate::models::Person;
use crate::paging::{PagingConfig, PagingData, PeoplePagingSource};
use crate::repository::PeopleRepository;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeopleState {
    pub people: PagingData<Person>,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone)]
pub enum PeopleEvent {
    PageUpdated(PagingData<Person>),
}

pub fn reduce(_state: &PeopleState, event: PeopleEvent) -> PeopleState {
    match event {
        PeopleEvent::PageUpdated(people) => PeopleState {
            error_message: paging_error(&people),
            people,
        },
    }
}

/// Popular people list.
pub struct PeopleViewModel {
    state: StateFlow<PeopleState>,
    feed: PagedFeed<Person>,
    scope: ViewModelScope,
}

impl PeopleViewModel {
    /// Create the view-model and start loading the first page.
    pub fn new(repository: PeopleRepository, config: PagingConfig) -> Self {
        let vm = Self {
            state: StateFlow::new(PeopleState::default()),
            feed: PagedFeed::new(config),
            scope: ViewModelScope::new(),
        };
        let state = vm.state.clone();
        vm.feed.attach(
            &vm.scope,
            Arc::new(PeoplePagingSource::new(repository)),
            move |data| dispatch(&state, reduce, PeopleEvent::PageUpdated(data)),
        );
        vm
    }

    pub fn state(&self) -> BoxStream<'static, PeopleState> {
        self.state.stream()
    }

    pub fn current(&self) -> PeopleState {
        self.state.value()
    }

    pub fn on_item_accessed(&self, index: usize) {
        self.feed
            .with_pager(&self.scope, move |pager| async move {
                pager.on_item_accessed(index).await
            });
    }

    pub fn load_next(&self) {
        self.feed
            .with_pager(&self.scope, |pager| async move { pager.load_next().await });
    }

    pub fn retry(&self) {
        self.feed
            .with_pager(&self.scope, |pager| async move { pager.retry().await });
    }

    pub fn refresh(&self) {
        self.feed
            .with_pager(&self.scope, |pager| async move { pager.refresh().await });
    }
}
