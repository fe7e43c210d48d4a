//! Storybook story templates, one per target framework.

use crate::model::Framework;

const REACT_STORY: &str = r#"import type { Meta, StoryObj } from '@storybook/react';

import { {name} } from './{name}';

const meta: Meta<typeof {name}> = {
  title: 'Components/{name}',
  component: {name},
};

export default meta;
type Story = StoryObj<typeof {name}>;

export const Primary: Story = {
  args: { variant: 'primary' },
};

export const Secondary: Story = {
  args: { variant: 'secondary' },
};
"#;

const VUE_STORY: &str = r#"import type { Meta, StoryObj } from '@storybook/vue3';

import {name} from './{name}.vue';

const meta: Meta<typeof {name}> = {
  title: 'Components/{name}',
  component: {name},
};

export default meta;
type Story = StoryObj<typeof {name}>;

export const Primary: Story = {
  args: { variant: 'primary' },
};

export const Secondary: Story = {
  args: { variant: 'secondary' },
};
"#;

const SVELTE_STORY: &str = r#"import type { Meta, StoryObj } from '@storybook/svelte';

import {name} from './{name}.svelte';

const meta: Meta<typeof {name}> = {
  title: 'Components/{name}',
  component: {name},
};

export default meta;
type Story = StoryObj<typeof {name}>;

export const Primary: Story = {
  args: { variant: 'primary' },
};

export const Secondary: Story = {
  args: { variant: 'secondary' },
};
"#;

const ANGULAR_STORY: &str = r#"import type { Meta, StoryObj } from '@storybook/angular';

import { {name}Component } from './{name_lower}.component';

const meta: Meta<{name}Component> = {
  title: 'Components/{name}',
  component: {name}Component,
};

export default meta;
type Story = StoryObj<{name}Component>;

export const Primary: Story = {
  args: { variant: 'primary' },
};

export const Secondary: Story = {
  args: { variant: 'secondary' },
};
"#;

const WEBC_STORY: &str = r#"import type { Meta, StoryObj } from '@storybook/web-components';
import { html } from 'lit';

import './{name_lower}-element';

const meta: Meta = {
  title: 'Components/{name}',
};

export default meta;
type Story = StoryObj;

export const Primary: Story = {
  render: () => html`<{name_lower}-element variant="primary"></{name_lower}-element>`,
};

export const Secondary: Story = {
  render: () => html`<{name_lower}-element variant="secondary"></{name_lower}-element>`,
};
"#;

/// Render the story source for `framework`. Pure lookup-and-substitute,
/// same substitution contract as `templates::render_component`.
pub fn render_story(name: &str, framework: Framework) -> String {
    let template = match framework {
        Framework::React => REACT_STORY,
        Framework::Vue => VUE_STORY,
        Framework::Svelte => SVELTE_STORY,
        Framework::Angular => ANGULAR_STORY,
        Framework::WebC => WEBC_STORY,
    };
    template
        .replace("{name_lower}", &name.to_lowercase())
        .replace("{name}", name)
}
